mod common;

use soroban_sdk::Env;
use tidepool_math::UNCAPPED_MAX_FEE;
use tidepool_swap::*;
use tidepool_transfer_fee::{TransferFee, TransferFeeConfig};

fn route_fees() -> TwoHopTransferFees {
    TwoHopTransferFees {
        input: Some(TransferFeeConfig::constant(100, UNCAPPED_MAX_FEE)),
        intermediate: Some(TransferFeeConfig::constant(200, UNCAPPED_MAX_FEE)),
        output: Some(TransferFeeConfig::constant(50, UNCAPPED_MAX_FEE)),
    }
}

fn no_fees() -> TwoHopTransferFees {
    TwoHopTransferFees::default()
}

// ============================================================
// EXACT INPUT
// ============================================================

#[test]
fn test_two_hop_by_input_token() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);

    let quote = two_hop_quote_by_input_token(&env, &hop_one, &hop_two, &route_fees(), 100_000_000, 50, 0).unwrap();

    assert!(quote.amount_specified_is_input);
    assert_eq!(quote.amount_in, 100_000_000);
    assert_eq!(quote.amount_out, 86_206_311);
    assert_eq!(quote.other_amount_threshold, 85_775_279);

    assert_eq!(quote.quote_one.transfer_fee_in, 1_000_000);
    assert_eq!(quote.quote_one.trade_fee, 297_000);
    // 98_696_505 leaves the first pool, 2% is lost between the vaults.
    assert_eq!(quote.quote_one.amount_out, 96_722_574);
    assert_eq!(quote.quote_one.transfer_fee_out, 1_973_931);

    assert_eq!(quote.quote_two.amount_in, quote.quote_one.amount_out);
    assert_eq!(quote.quote_two.transfer_fee_in, 0);
    assert_eq!(quote.quote_two.trade_fee, 967_226);
    assert_eq!(quote.quote_two.transfer_fee_out, 433_198);
    assert_eq!(quote.quote_two.end_tick_index, 1000);
}

#[test]
fn test_two_hop_without_transfer_fees() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);

    let quote = two_hop_quote_by_input_token(&env, &hop_one, &hop_two, &no_fees(), 100_000_000, 0, 0).unwrap();

    assert_eq!(quote.quote_one.amount_out, 99_693_373);
    assert_eq!(quote.quote_two.amount_in, 99_693_373);
    assert_eq!(quote.amount_out, 89_300_485);
    assert_eq!(quote.other_amount_threshold, 89_300_485);
}

#[test]
fn test_two_hop_per_hop_thresholds_are_open() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);

    let by_input = two_hop_quote_by_input_token(&env, &hop_one, &hop_two, &no_fees(), 100_000_000, 100, 0).unwrap();
    assert_eq!(by_input.quote_one.other_amount_threshold, 0);
    assert_eq!(by_input.quote_two.other_amount_threshold, 0);

    let by_output = two_hop_quote_by_output_token(&env, &hop_one, &hop_two, &no_fees(), 100_000_000, 100, 0).unwrap();
    assert_eq!(by_output.quote_one.other_amount_threshold, u128::MAX);
    assert_eq!(by_output.quote_two.other_amount_threshold, u128::MAX);
}

// ============================================================
// EXACT OUTPUT
// ============================================================

#[test]
fn test_two_hop_by_output_token() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);

    let quote = two_hop_quote_by_output_token(&env, &hop_one, &hop_two, &route_fees(), 100_000_000, 50, 0).unwrap();

    assert!(!quote.amount_specified_is_input);
    assert_eq!(quote.amount_out, 100_000_000);
    assert_eq!(quote.amount_in, 116_002_856);
    assert_eq!(quote.other_amount_threshold, 116_582_871);

    assert_eq!(quote.quote_two.amount_in, 112_199_766);
    assert_eq!(quote.quote_two.transfer_fee_out, 502_513);
    assert_eq!(quote.quote_one.amount_out, quote.quote_two.amount_in);
    assert_eq!(quote.quote_one.transfer_fee_out, 2_289_792);
    assert_eq!(quote.quote_one.transfer_fee_in, 1_160_029);
    assert_eq!(quote.quote_one.trade_fee, 344_529);
}

// ============================================================
// FAILURES
// ============================================================

#[test]
fn test_uncapped_full_intermediate_fee_rejected() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);
    let fees = TwoHopTransferFees {
        input: None,
        intermediate: Some(TransferFeeConfig::constant(10_000, UNCAPPED_MAX_FEE)),
        output: None,
    };

    assert_eq!(
        two_hop_quote_by_input_token(&env, &hop_one, &hop_two, &fees, 100_000_000, 0, 0).err(),
        Some(QuoteError::TransferFeeCalculationError)
    );
    assert_eq!(
        two_hop_quote_by_output_token(&env, &hop_one, &hop_two, &fees, 100_000_000, 0, 0).err(),
        Some(QuoteError::TransferFeeCalculationError)
    );
}

#[test]
fn test_intermediate_fee_checked_at_epoch() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);
    let fees = TwoHopTransferFees {
        input: None,
        intermediate: Some(TransferFeeConfig {
            older_transfer_fee: TransferFee { epoch: 0, fee_bps: 0, max_fee: 0 },
            newer_transfer_fee: TransferFee { epoch: 10, fee_bps: 10_000, max_fee: UNCAPPED_MAX_FEE },
        }),
        output: None,
    };

    assert!(two_hop_quote_by_input_token(&env, &hop_one, &hop_two, &fees, 100_000_000, 0, 9).is_ok());
    assert_eq!(
        two_hop_quote_by_input_token(&env, &hop_one, &hop_two, &fees, 100_000_000, 0, 10).err(),
        Some(QuoteError::TransferFeeCalculationError)
    );
}

#[test]
fn test_two_hop_first_pool_out_of_data() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);

    assert_eq!(
        two_hop_quote_by_input_token(&env, &hop_one, &hop_two, &no_fees(), 1_000_000_000_000_000, 0, 0).err(),
        Some(QuoteError::InsufficientTickArrayData)
    );
}

#[test]
fn test_two_hop_invalid_slippage() {
    let env = Env::default();
    let (hop_one, hop_two) = common::route(&env);

    assert_eq!(
        two_hop_quote_by_output_token(&env, &hop_one, &hop_two, &no_fees(), 1000, 10_001, 0).err(),
        Some(QuoteError::InvalidSlippageTolerance)
    );
}
