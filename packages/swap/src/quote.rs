// Swap Quotes
//
// Wraps the swap loop with transfer fees and slippage thresholds. Every
// amount in a `SwapQuote` is what the trader sends or receives.

use soroban_sdk::{Env, Vec};
use tidepool_math::{mul_div, QuoteError, Rounding, BPS_DENOMINATOR, MAX_SLIPPAGE_TOLERANCE_BPS};
use tidepool_tick::{TickArraySnapshot, TickSequence};
use tidepool_transfer_fee::{exclude_fee, include_fee, TransferFeeConfig};
use crate::engine::compute_swap;
use crate::types::{PoolSnapshot, SwapQuote, SwapRequest};

// ============================================================
// SLIPPAGE
// ============================================================

pub(crate) fn validate_slippage_tolerance(slippage_tolerance_bps: u32) -> Result<(), QuoteError> {
    if slippage_tolerance_bps > MAX_SLIPPAGE_TOLERANCE_BPS {
        return Err(QuoteError::InvalidSlippageTolerance);
    }
    Ok(())
}

/// floor(amount * (10000 - slippage) / 10000)
pub fn get_min_amount_with_slippage_tolerance(
    env: &Env,
    amount: u128,
    slippage_tolerance_bps: u32,
) -> Result<u128, QuoteError> {
    validate_slippage_tolerance(slippage_tolerance_bps)?;
    mul_div(
        env,
        amount,
        (BPS_DENOMINATOR - slippage_tolerance_bps) as u128,
        BPS_DENOMINATOR as u128,
        Rounding::Down,
    )
}

/// ceil(amount * (10000 + slippage) / 10000)
pub fn get_max_amount_with_slippage_tolerance(
    env: &Env,
    amount: u128,
    slippage_tolerance_bps: u32,
) -> Result<u128, QuoteError> {
    validate_slippage_tolerance(slippage_tolerance_bps)?;
    mul_div(
        env,
        amount,
        (BPS_DENOMINATOR + slippage_tolerance_bps) as u128,
        BPS_DENOMINATOR as u128,
        Rounding::Up,
    )
}

// ============================================================
// DIRECTED QUOTES
// ============================================================

/// Exact-input quote with the transfer fees already mapped to input and output
pub(crate) fn quote_exact_input(
    env: &Env,
    pool: &PoolSnapshot,
    tick_arrays: &Vec<TickArraySnapshot>,
    token_in: u128,
    a_to_b: bool,
    slippage_tolerance_bps: u32,
    sqrt_price_limit: u128,
    transfer_fee_in: Option<&TransferFeeConfig>,
    transfer_fee_out: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<SwapQuote, QuoteError> {
    validate_slippage_tolerance(slippage_tolerance_bps)?;

    let tradable = exclude_fee(transfer_fee_in, epoch, token_in)?;
    if tradable.amount == 0 {
        return Err(QuoteError::ZeroTradableAmount);
    }

    let sequence = TickSequence::new(env, tick_arrays, pool.tick_spacing)?;
    let swap = compute_swap(env, pool, &sequence, tradable.amount, sqrt_price_limit, a_to_b, true)?;

    // A price-limited swap consumes less than was offered.
    let sent = include_fee(transfer_fee_in, epoch, swap.amount_in)?;
    let received = exclude_fee(transfer_fee_out, epoch, swap.amount_out)?;
    let other_amount_threshold =
        get_min_amount_with_slippage_tolerance(env, received.amount, slippage_tolerance_bps)?;

    Ok(SwapQuote {
        amount_in: sent.amount,
        amount_out: received.amount,
        other_amount_threshold,
        sqrt_price_limit: swap.sqrt_price_limit,
        end_sqrt_price: swap.end_sqrt_price,
        end_tick_index: swap.end_tick_index,
        trade_fee: swap.trade_fee,
        protocol_fee: swap.protocol_fee,
        lp_fee: swap.lp_fee,
        transfer_fee_in: sent.fee,
        transfer_fee_out: received.fee,
        a_to_b,
        amount_specified_is_input: true,
        outcome: swap.outcome,
        tick_array_start_indexes: swap.tick_array_start_indexes,
    })
}

/// Exact-output quote with the transfer fees already mapped to input and output
pub(crate) fn quote_exact_output(
    env: &Env,
    pool: &PoolSnapshot,
    tick_arrays: &Vec<TickArraySnapshot>,
    token_out: u128,
    a_to_b: bool,
    slippage_tolerance_bps: u32,
    sqrt_price_limit: u128,
    transfer_fee_in: Option<&TransferFeeConfig>,
    transfer_fee_out: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<SwapQuote, QuoteError> {
    validate_slippage_tolerance(slippage_tolerance_bps)?;

    let required = include_fee(transfer_fee_out, epoch, token_out)?;

    let sequence = TickSequence::new(env, tick_arrays, pool.tick_spacing)?;
    let swap = compute_swap(env, pool, &sequence, required.amount, sqrt_price_limit, a_to_b, false)?;

    let received = exclude_fee(transfer_fee_out, epoch, swap.amount_out)?;
    let sent = include_fee(transfer_fee_in, epoch, swap.amount_in)?;
    let other_amount_threshold =
        get_max_amount_with_slippage_tolerance(env, sent.amount, slippage_tolerance_bps)?;

    Ok(SwapQuote {
        amount_in: sent.amount,
        amount_out: received.amount,
        other_amount_threshold,
        sqrt_price_limit: swap.sqrt_price_limit,
        end_sqrt_price: swap.end_sqrt_price,
        end_tick_index: swap.end_tick_index,
        trade_fee: swap.trade_fee,
        protocol_fee: swap.protocol_fee,
        lp_fee: swap.lp_fee,
        transfer_fee_in: sent.fee,
        transfer_fee_out: received.fee,
        a_to_b,
        amount_specified_is_input: false,
        outcome: swap.outcome,
        tick_array_start_indexes: swap.tick_array_start_indexes,
    })
}

/// Input and output transfer fee schedules for a direction
#[inline]
fn transfer_fees_for_direction<'a>(
    a_to_b: bool,
    transfer_fee_a: Option<&'a TransferFeeConfig>,
    transfer_fee_b: Option<&'a TransferFeeConfig>,
) -> (Option<&'a TransferFeeConfig>, Option<&'a TransferFeeConfig>) {
    if a_to_b {
        (transfer_fee_a, transfer_fee_b)
    } else {
        (transfer_fee_b, transfer_fee_a)
    }
}

// ============================================================
// PUBLIC ENTRY POINTS
// ============================================================

/// Quote a swap that sends exactly `token_in`
///
/// # Arguments
/// * `token_in` - Amount the trader sends, before the input transfer fee
/// * `a_to_b` - Direction (true = token A in)
/// * `slippage_tolerance_bps` - Tolerance used for the minimum output
/// * `sqrt_price_limit` - Price the swap may not pass (0 for no limit)
/// * `transfer_fee_a` / `transfer_fee_b` - Transfer fee schedules, `None` for plain tokens
/// * `epoch` - Epoch selecting the transfer fee in force
///
/// # Returns
/// The quote, with `other_amount_threshold` as the minimum output
pub fn swap_quote_by_input_token(
    env: &Env,
    pool: &PoolSnapshot,
    tick_arrays: &Vec<TickArraySnapshot>,
    token_in: u128,
    a_to_b: bool,
    slippage_tolerance_bps: u32,
    sqrt_price_limit: u128,
    transfer_fee_a: Option<&TransferFeeConfig>,
    transfer_fee_b: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<SwapQuote, QuoteError> {
    let (fee_in, fee_out) = transfer_fees_for_direction(a_to_b, transfer_fee_a, transfer_fee_b);
    quote_exact_input(
        env,
        pool,
        tick_arrays,
        token_in,
        a_to_b,
        slippage_tolerance_bps,
        sqrt_price_limit,
        fee_in,
        fee_out,
        epoch,
    )
}

/// Quote a swap that delivers exactly `token_out`
///
/// Same arguments as [`swap_quote_by_input_token`]; `other_amount_threshold`
/// is the maximum input.
pub fn swap_quote_by_output_token(
    env: &Env,
    pool: &PoolSnapshot,
    tick_arrays: &Vec<TickArraySnapshot>,
    token_out: u128,
    a_to_b: bool,
    slippage_tolerance_bps: u32,
    sqrt_price_limit: u128,
    transfer_fee_a: Option<&TransferFeeConfig>,
    transfer_fee_b: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<SwapQuote, QuoteError> {
    let (fee_in, fee_out) = transfer_fees_for_direction(a_to_b, transfer_fee_a, transfer_fee_b);
    quote_exact_output(
        env,
        pool,
        tick_arrays,
        token_out,
        a_to_b,
        slippage_tolerance_bps,
        sqrt_price_limit,
        fee_in,
        fee_out,
        epoch,
    )
}

/// Quote a `SwapRequest`, exact input or exact output
pub fn quote_swap(
    env: &Env,
    pool: &PoolSnapshot,
    tick_arrays: &Vec<TickArraySnapshot>,
    request: &SwapRequest,
    transfer_fee_a: Option<&TransferFeeConfig>,
    transfer_fee_b: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<SwapQuote, QuoteError> {
    if request.amount_specified_is_input {
        swap_quote_by_input_token(
            env,
            pool,
            tick_arrays,
            request.amount,
            request.a_to_b,
            request.slippage_tolerance_bps,
            request.sqrt_price_limit,
            transfer_fee_a,
            transfer_fee_b,
            epoch,
        )
    } else {
        swap_quote_by_output_token(
            env,
            pool,
            tick_arrays,
            request.amount,
            request.a_to_b,
            request.slippage_tolerance_bps,
            request.sqrt_price_limit,
            transfer_fee_a,
            transfer_fee_b,
            epoch,
        )
    }
}
