// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::{Env, U256};
use crate::constants::Q64;
use crate::error::QuoteError;
use crate::q64::{mul_div, Rounding};

#[inline]
fn order_sqrt_prices(sqrt_price_a: u128, sqrt_price_b: u128) -> (u128, u128) {
    if sqrt_price_a < sqrt_price_b {
        (sqrt_price_a, sqrt_price_b)
    } else {
        (sqrt_price_b, sqrt_price_a)
    }
}

#[inline]
fn bit_length(x: u128) -> u32 {
    128 - x.leading_zeros()
}

#[inline]
fn exceeds_max(err: QuoteError) -> QuoteError {
    match err {
        QuoteError::ArithmeticOverflow => QuoteError::AmountExceedsMax,
        other => other,
    }
}

/// Calculate token A amount for a liquidity and price range
/// Formula: L * (sqrt_upper - sqrt_lower) * 2^64 / (sqrt_upper * sqrt_lower)
///
/// Evaluated as one 256-bit division when the numerator fits. Otherwise it is
/// split into two chained divisions, which can only move the result further in
/// the requested rounding direction.
pub fn get_amount_delta_a(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, QuoteError> {
    let (sqrt_lower, sqrt_upper) = order_sqrt_prices(sqrt_price_a, sqrt_price_b);
    let delta = sqrt_upper - sqrt_lower;

    if liquidity == 0 || delta == 0 {
        return Ok(0);
    }
    if sqrt_lower == 0 {
        return Err(QuoteError::DivisionByZero);
    }

    let rounding = Rounding::from_round_up(round_up);

    if bit_length(liquidity) + bit_length(delta) + 64 <= 256 {
        let numerator = U256::from_u128(env, liquidity)
            .mul(&U256::from_u128(env, delta))
            .shl(64);
        let denominator = U256::from_u128(env, sqrt_upper).mul(&U256::from_u128(env, sqrt_lower));

        let quotient = numerator
            .div(&denominator)
            .to_u128()
            .ok_or(QuoteError::AmountExceedsMax)?;

        return if rounding == Rounding::Up
            && numerator.rem_euclid(&denominator) != U256::from_u32(env, 0)
        {
            quotient.checked_add(1).ok_or(QuoteError::AmountExceedsMax)
        } else {
            Ok(quotient)
        };
    }

    let scaled = mul_div(env, liquidity, delta, sqrt_upper, rounding).map_err(exceeds_max)?;
    mul_div(env, scaled, Q64, sqrt_lower, rounding).map_err(exceeds_max)
}

/// Calculate token B amount for a liquidity and price range
/// Formula: L * (sqrt_upper - sqrt_lower) / 2^64
pub fn get_amount_delta_b(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    round_up: bool,
) -> Result<u128, QuoteError> {
    let (sqrt_lower, sqrt_upper) = order_sqrt_prices(sqrt_price_a, sqrt_price_b);
    let delta = sqrt_upper - sqrt_lower;

    if liquidity == 0 || delta == 0 {
        return Ok(0);
    }

    mul_div(env, liquidity, delta, Q64, Rounding::from_round_up(round_up)).map_err(exceeds_max)
}

/// Token amounts backing `liquidity` over [sqrt_price_lower, sqrt_price_upper]
/// at `current_sqrt_price`.
///
/// Below the range everything is token A, above it everything is token B.
pub fn get_amounts_for_liquidity(
    env: &Env,
    liquidity: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
    round_up: bool,
) -> Result<(u128, u128), QuoteError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(QuoteError::InvalidPositionRange);
    }

    if current_sqrt_price <= sqrt_price_lower {
        let amount_a = get_amount_delta_a(env, sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?;
        Ok((amount_a, 0))
    } else if current_sqrt_price >= sqrt_price_upper {
        let amount_b = get_amount_delta_b(env, sqrt_price_lower, sqrt_price_upper, liquidity, round_up)?;
        Ok((0, amount_b))
    } else {
        let amount_a = get_amount_delta_a(env, current_sqrt_price, sqrt_price_upper, liquidity, round_up)?;
        let amount_b = get_amount_delta_b(env, sqrt_price_lower, current_sqrt_price, liquidity, round_up)?;
        Ok((amount_a, amount_b))
    }
}

/// Calculate liquidity from token A amount
/// Formula: amount * sqrt_lower * sqrt_upper / (sqrt_upper - sqrt_lower)
pub fn get_liquidity_for_amount_a(
    env: &Env,
    amount_a: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> Result<u128, QuoteError> {
    let (sqrt_lower, sqrt_upper) = order_sqrt_prices(sqrt_price_lower, sqrt_price_upper);
    let delta = sqrt_upper - sqrt_lower;
    if delta == 0 {
        return Err(QuoteError::InvalidPositionRange);
    }

    let scaled = mul_div(env, amount_a, sqrt_lower, delta, Rounding::Down)?;
    mul_div(env, scaled, sqrt_upper, Q64, Rounding::Down)
}

/// Calculate liquidity from token B amount
/// Formula: amount * 2^64 / (sqrt_upper - sqrt_lower)
pub fn get_liquidity_for_amount_b(
    env: &Env,
    amount_b: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
) -> Result<u128, QuoteError> {
    let (sqrt_lower, sqrt_upper) = order_sqrt_prices(sqrt_price_lower, sqrt_price_upper);
    let delta = sqrt_upper - sqrt_lower;
    if delta == 0 {
        return Err(QuoteError::InvalidPositionRange);
    }

    mul_div(env, amount_b, Q64, delta, Rounding::Down)
}

/// Largest liquidity both token amounts can back at `current_sqrt_price`
pub fn get_liquidity_for_amounts(
    env: &Env,
    amount_a: u128,
    amount_b: u128,
    sqrt_price_lower: u128,
    sqrt_price_upper: u128,
    current_sqrt_price: u128,
) -> Result<u128, QuoteError> {
    if sqrt_price_lower >= sqrt_price_upper {
        return Err(QuoteError::InvalidPositionRange);
    }

    if current_sqrt_price <= sqrt_price_lower {
        get_liquidity_for_amount_a(env, amount_a, sqrt_price_lower, sqrt_price_upper)
    } else if current_sqrt_price >= sqrt_price_upper {
        get_liquidity_for_amount_b(env, amount_b, sqrt_price_lower, sqrt_price_upper)
    } else {
        let liquidity_a = get_liquidity_for_amount_a(env, amount_a, current_sqrt_price, sqrt_price_upper)?;
        let liquidity_b = get_liquidity_for_amount_b(env, amount_b, sqrt_price_lower, current_sqrt_price)?;
        Ok(liquidity_a.min(liquidity_b))
    }
}
