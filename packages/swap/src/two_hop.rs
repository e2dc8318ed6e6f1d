// Two-Hop Quotes
//
// The intermediate token moves vault to vault, so its transfer fee is paid
// once between the hops. Each hop's own threshold is left open; only the
// composite threshold binds.

use soroban_sdk::{log, Env};
use tidepool_math::{QuoteError, MAX_TRANSFER_FEE_BPS, UNCAPPED_MAX_FEE};
use tidepool_transfer_fee::{exclude_fee, include_fee, validate_transfer_fee_config, TransferFeeConfig};
use crate::quote::{
    get_max_amount_with_slippage_tolerance, get_min_amount_with_slippage_tolerance,
    quote_exact_input, quote_exact_output, validate_slippage_tolerance,
};
use crate::types::{SwapHop, SwapOutcome, TwoHopQuote, TwoHopTransferFees};

/// Reject an intermediate fee that cannot be inverted
fn check_intermediate_fee(config: Option<&TransferFeeConfig>, epoch: u64) -> Result<(), QuoteError> {
    let Some(config) = config else {
        return Ok(());
    };
    validate_transfer_fee_config(config)?;

    let fee = config.fee_in_force(epoch);
    if fee.fee_bps == MAX_TRANSFER_FEE_BPS && fee.max_fee == UNCAPPED_MAX_FEE {
        return Err(QuoteError::TransferFeeCalculationError);
    }
    Ok(())
}

/// Quote a two-hop route that sends exactly `amount_in`
///
/// The second hop trades exactly what reaches its vault after the
/// intermediate transfer fee. If that amount cannot be fully traded the route
/// fails with `InsufficientTickArrayData`.
pub fn two_hop_quote_by_input_token(
    env: &Env,
    hop_one: &SwapHop,
    hop_two: &SwapHop,
    fees: &TwoHopTransferFees,
    amount_in: u128,
    slippage_tolerance_bps: u32,
    epoch: u64,
) -> Result<TwoHopQuote, QuoteError> {
    validate_slippage_tolerance(slippage_tolerance_bps)?;
    check_intermediate_fee(fees.intermediate.as_ref(), epoch)?;

    let mut quote_one = quote_exact_input(
        env,
        &hop_one.pool,
        &hop_one.tick_arrays,
        amount_in,
        hop_one.a_to_b,
        0,
        0,
        fees.input.as_ref(),
        None,
        epoch,
    )?;

    let intermediate = exclude_fee(fees.intermediate.as_ref(), epoch, quote_one.amount_out)?;
    log!(env, "two-hop intermediate", quote_one.amount_out, intermediate.amount, intermediate.fee);

    quote_one.amount_out = intermediate.amount;
    quote_one.transfer_fee_out = intermediate.fee;
    quote_one.other_amount_threshold = 0;

    let mut quote_two = quote_exact_input(
        env,
        &hop_two.pool,
        &hop_two.tick_arrays,
        intermediate.amount,
        hop_two.a_to_b,
        0,
        0,
        None,
        fees.output.as_ref(),
        epoch,
    )?;
    if quote_two.outcome != SwapOutcome::Filled {
        return Err(QuoteError::InsufficientTickArrayData);
    }
    quote_two.other_amount_threshold = 0;

    let other_amount_threshold =
        get_min_amount_with_slippage_tolerance(env, quote_two.amount_out, slippage_tolerance_bps)?;

    Ok(TwoHopQuote {
        amount_in: quote_one.amount_in,
        amount_out: quote_two.amount_out,
        other_amount_threshold,
        amount_specified_is_input: true,
        quote_one,
        quote_two,
    })
}

/// Quote a two-hop route that delivers exactly `amount_out`
///
/// The first hop must deliver the second hop's input plus the intermediate
/// transfer fee. If it cannot, the route fails with `InsufficientTickArrayData`.
pub fn two_hop_quote_by_output_token(
    env: &Env,
    hop_one: &SwapHop,
    hop_two: &SwapHop,
    fees: &TwoHopTransferFees,
    amount_out: u128,
    slippage_tolerance_bps: u32,
    epoch: u64,
) -> Result<TwoHopQuote, QuoteError> {
    validate_slippage_tolerance(slippage_tolerance_bps)?;
    check_intermediate_fee(fees.intermediate.as_ref(), epoch)?;

    let mut quote_two = quote_exact_output(
        env,
        &hop_two.pool,
        &hop_two.tick_arrays,
        amount_out,
        hop_two.a_to_b,
        0,
        0,
        None,
        fees.output.as_ref(),
        epoch,
    )?;
    quote_two.other_amount_threshold = u128::MAX;

    let intermediate = include_fee(fees.intermediate.as_ref(), epoch, quote_two.amount_in)?;
    log!(env, "two-hop intermediate", intermediate.amount, quote_two.amount_in, intermediate.fee);

    let mut quote_one = quote_exact_output(
        env,
        &hop_one.pool,
        &hop_one.tick_arrays,
        intermediate.amount,
        hop_one.a_to_b,
        0,
        0,
        fees.input.as_ref(),
        None,
        epoch,
    )?;
    if quote_one.outcome != SwapOutcome::Filled {
        return Err(QuoteError::InsufficientTickArrayData);
    }

    quote_one.amount_out = quote_two.amount_in;
    quote_one.transfer_fee_out = intermediate.fee;
    quote_one.other_amount_threshold = u128::MAX;

    let other_amount_threshold =
        get_max_amount_with_slippage_tolerance(env, quote_one.amount_in, slippage_tolerance_bps)?;

    Ok(TwoHopQuote {
        amount_in: quote_one.amount_in,
        amount_out: quote_two.amount_out,
        other_amount_threshold,
        amount_specified_is_input: false,
        quote_one,
        quote_two,
    })
}
