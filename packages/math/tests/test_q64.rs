use tidepool_math::*;
use soroban_sdk::Env;

// ============================================================
// MUL / DIV TESTS
// ============================================================

#[test]
fn test_mul_q64_basic() {
    let one = ONE_X64;
    let two = one * 2;
    let three = one * 3;

    assert_eq!(mul_q64(one, one, Rounding::Down), Ok(one));
    assert_eq!(mul_q64(two, three, Rounding::Down), Ok(one * 6));
    assert_eq!(mul_q64(one / 2, two, Rounding::Down), Ok(one));
    assert_eq!(mul_q64(0, three, Rounding::Up), Ok(0));
}

#[test]
fn test_mul_q64_rounding() {
    // (1 + 2^-64)^2 = 1 + 2^-63 + 2^-128
    let x = ONE_X64 + 1;
    assert_eq!(mul_q64(x, x, Rounding::Down), Ok(ONE_X64 + 2));
    assert_eq!(mul_q64(x, x, Rounding::Up), Ok(ONE_X64 + 3));
}

#[test]
fn test_mul_q64_overflow() {
    assert_eq!(
        mul_q64(u128::MAX, ONE_X64 * 2, Rounding::Down),
        Err(QuoteError::ArithmeticOverflow)
    );
}

#[test]
fn test_div_q64_basic() {
    let env = Env::default();

    assert_eq!(div_q64(&env, 1, 1, Rounding::Down), Ok(ONE_X64));
    assert_eq!(div_q64(&env, 6, 2, Rounding::Down), Ok(ONE_X64 * 3));
    assert_eq!(div_q64(&env, 1, 2, Rounding::Down), Ok(ONE_X64 / 2));
    assert_eq!(div_q64(&env, 1, 0, Rounding::Down), Err(QuoteError::DivisionByZero));
}

#[test]
fn test_mul_div_native_path() {
    let env = Env::default();

    assert_eq!(mul_div(&env, 10, 1, 3, Rounding::Down), Ok(3));
    assert_eq!(mul_div(&env, 10, 1, 3, Rounding::Up), Ok(4));
    assert_eq!(mul_div(&env, 9, 1, 3, Rounding::Up), Ok(3));
    assert_eq!(mul_div(&env, 0, 5, 3, Rounding::Up), Ok(0));
}

#[test]
fn test_mul_div_wide_path() {
    let env = Env::default();
    let a = 1u128 << 127;

    // 2^127 * 3 does not fit in 128 bits.
    assert_eq!(
        mul_div(&env, a, 3, 7, Rounding::Down),
        Ok(72917650054486813599294558735378902454)
    );
    assert_eq!(
        mul_div(&env, a, 3, 7, Rounding::Up),
        Ok(72917650054486813599294558735378902455)
    );
    assert_eq!(mul_div(&env, a, 4, 2, Rounding::Down), Err(QuoteError::ArithmeticOverflow));
}

#[test]
fn test_div_round_up() {
    assert_eq!(div_round_up(10, 3), Ok(4));
    assert_eq!(div_round_up(10, 5), Ok(2));
    assert_eq!(div_round_up(0, 5), Ok(0));
    assert_eq!(div_round_up(1, 0), Err(QuoteError::DivisionByZero));
}

// ============================================================
// SQRT TESTS
// ============================================================

#[test]
fn test_sqrt_q64_perfect_squares() {
    assert_eq!(sqrt_q64(0, Rounding::Down), 0);
    assert_eq!(sqrt_q64(ONE_X64, Rounding::Down), ONE_X64);
    assert_eq!(sqrt_q64(ONE_X64 * 4, Rounding::Up), ONE_X64 * 2);
    assert_eq!(sqrt_q64(ONE_X64 / 4, Rounding::Up), ONE_X64 / 2);
}

#[test]
fn test_sqrt_q64_irrational() {
    // floor(sqrt(2) * 2^64)
    assert_eq!(sqrt_q64(ONE_X64 * 2, Rounding::Down), 26087635650665564424);
    assert_eq!(sqrt_q64(ONE_X64 * 2, Rounding::Up), 26087635650665564425);
    assert_eq!(sqrt_q64(ONE_X64 * 3, Rounding::Down), 31950697969885030203);
}

#[test]
fn test_sqrt_q64_max_input() {
    let root = sqrt_q64(u128::MAX, Rounding::Down);
    assert!(root < 1u128 << 96);
    assert!(root > (1u128 << 96) - 2);
}
