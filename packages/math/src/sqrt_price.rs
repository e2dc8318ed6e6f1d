// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use soroban_sdk::{Env, U256};
use crate::constants::{MAX_SQRT_PRICE, MIN_SQRT_PRICE, Q64};
use crate::error::QuoteError;
use crate::q64::{mul_div, Rounding};

/// Calculate next sqrt price given input amount
///
/// Token A in (a_to_b) moves the price down, token B in moves it up.
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_in: u128,
    a_to_b: bool,
) -> Result<u128, QuoteError> {
    if a_to_b {
        next_sqrt_price_from_a(env, sqrt_price, liquidity, amount_in, true)
    } else {
        next_sqrt_price_from_b(env, sqrt_price, liquidity, amount_in, true)
    }
}

/// Calculate next sqrt price given output amount
///
/// Token B out (a_to_b) moves the price down, token A out moves it up.
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount_out: u128,
    a_to_b: bool,
) -> Result<u128, QuoteError> {
    if a_to_b {
        next_sqrt_price_from_b(env, sqrt_price, liquidity, amount_out, false)
    } else {
        next_sqrt_price_from_a(env, sqrt_price, liquidity, amount_out, false)
    }
}

/// Token A moved in (`amount_added`) or out of the pool.
///
/// Exact form: L·√P·2^64 / (L·2^64 ± amount·√P), rounded up. When the exact
/// numerator would exceed 256 bits, falls back to L·2^64 / (L·2^64/√P ± amount),
/// which is never below the exact value.
fn next_sqrt_price_from_a(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
    amount_added: bool,
) -> Result<u128, QuoteError> {
    if amount == 0 {
        return Ok(sqrt_price);
    }
    if liquidity == 0 || sqrt_price == 0 {
        return Err(QuoteError::DivisionByZero);
    }

    let liquidity_256 = U256::from_u128(env, liquidity);
    let sqrt_price_256 = U256::from_u128(env, sqrt_price);
    let amount_256 = U256::from_u128(env, amount);
    let liquidity_x64 = liquidity_256.shl(64);

    let next = if bit_length(liquidity) + bit_length(sqrt_price) + 64 <= 256 {
        let product = amount_256.mul(&sqrt_price_256);
        let denominator = if amount_added {
            liquidity_x64.add(&product)
        } else {
            // The pool cannot pay out all of its token A.
            if product >= liquidity_x64 {
                return Err(QuoteError::SqrtPriceOutOfBounds);
            }
            liquidity_x64.sub(&product)
        };
        let numerator = liquidity_256.mul(&sqrt_price_256).shl(64);
        div_round_up_256(env, &numerator, &denominator)?
    } else {
        let base = liquidity_x64.div(&sqrt_price_256);
        let denominator = if amount_added {
            base.add(&amount_256)
        } else {
            if amount_256 >= base {
                return Err(QuoteError::SqrtPriceOutOfBounds);
            }
            base.sub(&amount_256)
        };
        div_round_up_256(env, &liquidity_x64, &denominator)?
    };

    check_sqrt_price_bounds(next)
}

/// Token B moved in (`amount_added`) or out of the pool: √P ± amount·2^64 / L.
///
/// The quotient is rounded down when added and up when removed, so the price
/// never moves further than the amount pays for.
fn next_sqrt_price_from_b(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u128,
    amount_added: bool,
) -> Result<u128, QuoteError> {
    if amount == 0 {
        return Ok(sqrt_price);
    }
    if liquidity == 0 {
        return Err(QuoteError::DivisionByZero);
    }

    let next = if amount_added {
        let delta = mul_div(env, amount, Q64, liquidity, Rounding::Down)?;
        sqrt_price.checked_add(delta)
    } else {
        let delta = mul_div(env, amount, Q64, liquidity, Rounding::Up)?;
        sqrt_price.checked_sub(delta)
    };

    check_sqrt_price_bounds(next.ok_or(QuoteError::SqrtPriceOutOfBounds)?)
}

#[inline]
fn check_sqrt_price_bounds(sqrt_price: u128) -> Result<u128, QuoteError> {
    if (MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price) {
        Ok(sqrt_price)
    } else {
        Err(QuoteError::SqrtPriceOutOfBounds)
    }
}

#[inline]
fn bit_length(x: u128) -> u32 {
    128 - x.leading_zeros()
}

fn div_round_up_256(env: &Env, numerator: &U256, denominator: &U256) -> Result<u128, QuoteError> {
    let zero = U256::from_u32(env, 0);
    if *denominator == zero {
        return Err(QuoteError::DivisionByZero);
    }

    let quotient = numerator
        .div(denominator)
        .to_u128()
        .ok_or(QuoteError::ArithmeticOverflow)?;

    if numerator.rem_euclid(denominator) != zero {
        quotient.checked_add(1).ok_or(QuoteError::ArithmeticOverflow)
    } else {
        Ok(quotient)
    }
}
