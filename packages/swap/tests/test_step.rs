use soroban_sdk::Env;
use tidepool_math::{tick_index_to_sqrt_price, MIN_SQRT_PRICE, SQRT_PRICE_1_1};
use tidepool_swap::*;

// ============================================================
// SWAP FEE HELPERS
// ============================================================

#[test]
fn test_apply_swap_fee_rounds_fee_up() {
    let env = Env::default();
    assert_eq!(apply_swap_fee(&env, 1_000_000, 30).unwrap(), 997_000);
    // ceil(1001 * 30 / 10000) = 4
    assert_eq!(apply_swap_fee(&env, 1001, 30).unwrap(), 997);
    assert_eq!(apply_swap_fee(&env, 1001, 0).unwrap(), 1001);
}

#[test]
fn test_reverse_apply_swap_fee() {
    let env = Env::default();
    assert_eq!(reverse_apply_swap_fee(&env, 997_000, 30).unwrap(), 1_000_000);
    assert_eq!(reverse_apply_swap_fee(&env, 997, 30).unwrap(), 1000);
    assert_eq!(reverse_apply_swap_fee(&env, 997, 0).unwrap(), 997);
}

#[test]
fn test_fee_rate_above_full_rejected() {
    let env = Env::default();
    let target = tick_index_to_sqrt_price(-640).unwrap();

    assert_eq!(apply_swap_fee(&env, 1_000_000, 10_001), Err(QuoteError::InvalidFeeRate));
    assert_eq!(apply_swap_fee(&env, 1_000_000, 10_000), Ok(0));
    assert_eq!(
        compute_swap_step(&env, 1_000_000, 10_001, 1_500_000_000_000, SQRT_PRICE_1_1, target, true, true),
        Err(QuoteError::InvalidFeeRate)
    );
}

// ============================================================
// EXACT INPUT
// ============================================================

#[test]
fn test_step_exact_input_stops_before_target() {
    let env = Env::default();
    let target = tick_index_to_sqrt_price(-640).unwrap();

    let step = compute_swap_step(&env, 1_000_000, 30, 1_500_000_000_000, SQRT_PRICE_1_1, target, true, true).unwrap();

    assert_eq!(step.amount_in, 997_000);
    assert_eq!(step.amount_out, 996_999);
    assert_eq!(step.next_sqrt_price, 18446731812781806721);
    // The whole remainder not used as input is fee.
    assert_eq!(step.fee_amount, 3000);
}

#[test]
fn test_step_exact_input_reaches_target() {
    let env = Env::default();
    let target = tick_index_to_sqrt_price(-100).unwrap();

    let step = compute_swap_step(&env, 1_000_000_000_000, 30, 1_000_000_000, SQRT_PRICE_1_1, target, true, true).unwrap();

    assert_eq!(step.next_sqrt_price, target);
    assert_eq!(step.amount_in, 5_012_270);
    assert_eq!(step.amount_out, 4_987_272);
    assert_eq!(step.fee_amount, 15_083);
}

#[test]
fn test_step_fee_rate_changes_input_only() {
    let env = Env::default();
    let target = tick_index_to_sqrt_price(-100).unwrap();

    let free = compute_swap_step(&env, 1_000_000, 0, 1_000_000_000, SQRT_PRICE_1_1, target, true, true).unwrap();
    assert_eq!(free.amount_in, 1_000_000);
    assert_eq!(free.amount_out, 999_000);
    assert_eq!(free.fee_amount, 0);
    assert_eq!(free.next_sqrt_price, 18428315757951600016);

    let max_fee = compute_swap_step(&env, 1_000_000, 600, 1_000_000_000, SQRT_PRICE_1_1, target, true, true).unwrap();
    assert_eq!(max_fee.amount_in, 940_000);
    assert_eq!(max_fee.amount_out, 939_117);
    assert_eq!(max_fee.fee_amount, 60_000);
}

// ============================================================
// EXACT OUTPUT
// ============================================================

#[test]
fn test_step_exact_output_reaches_target() {
    let env = Env::default();
    let target = tick_index_to_sqrt_price(100).unwrap();

    let step = compute_swap_step(&env, 1_000_000_000_000, 30, 1_000_000_000, SQRT_PRICE_1_1, target, false, false).unwrap();

    assert_eq!(step.next_sqrt_price, target);
    assert_eq!(step.amount_in, 5_012_270);
    assert_eq!(step.amount_out, 4_987_272);
    assert_eq!(step.fee_amount, 15_083);
}

#[test]
fn test_step_exact_output_stops_before_target() {
    let env = Env::default();
    let target = tick_index_to_sqrt_price(100).unwrap();

    let step = compute_swap_step(&env, 1_000_000, 30, 1_000_000_000, SQRT_PRICE_1_1, target, false, false).unwrap();

    assert_eq!(step.amount_out, 1_000_000);
    assert_eq!(step.amount_in, 1_001_002);
    assert_eq!(step.next_sqrt_price, 18465209282992544161);
    // Fee is charged on the input token.
    assert_eq!(step.fee_amount, 3013);
}

// ============================================================
// EDGE CASES
// ============================================================

#[test]
fn test_step_zero_liquidity_moves_to_target_for_free() {
    let env = Env::default();
    let target = tick_index_to_sqrt_price(-100).unwrap();

    let step = compute_swap_step(&env, 1_000_000, 30, 0, SQRT_PRICE_1_1, target, true, true).unwrap();

    assert_eq!(step.next_sqrt_price, target);
    assert_eq!(step.amount_in, 0);
    assert_eq!(step.amount_out, 0);
    assert_eq!(step.fee_amount, 0);
}

#[test]
fn test_step_unreachable_target_is_not_an_error() {
    let env = Env::default();

    // Token A needed to reach the minimum price does not fit in u128.
    let step = compute_swap_step(&env, 1_000_000, 30, 1u128 << 127, SQRT_PRICE_1_1, MIN_SQRT_PRICE, true, true).unwrap();

    assert_eq!(step.next_sqrt_price, SQRT_PRICE_1_1);
    assert_eq!(step.amount_in, 0);
    assert_eq!(step.amount_out, 0);
    assert_eq!(step.fee_amount, 1_000_000);
}
