// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use soroban_sdk::{Env, U256};
use crate::constants::{Q64, Q64_MASK};
use crate::error::QuoteError;

pub const ONE_X64: u128 = Q64;

/// Direction in which a fixed-point result is rounded.
///
/// Call sites pick the direction that favors the pool: amounts the trader
/// pays round `Up`, amounts the trader receives round `Down`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

impl Rounding {
    #[inline]
    pub fn from_round_up(round_up: bool) -> Self {
        if round_up { Rounding::Up } else { Rounding::Down }
    }
}

/// Multiply two Q64.64 numbers, returning Q64.64 result
///
/// The full 256-bit product is assembled from 64-bit limbs, so no
/// intermediate can wrap. Fails if the narrowed result needs more than
/// 128 bits.
pub fn mul_q64(a: u128, b: u128, rounding: Rounding) -> Result<u128, QuoteError> {
    let a_hi = a >> 64;
    let a_lo = a & Q64_MASK;
    let b_hi = b >> 64;
    let b_lo = b & Q64_MASK;

    let term_hh = a_hi * b_hi;
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    // Every term is non-negative, so any overflow on the way means the
    // final value overflows too.
    let result = term_hh
        .checked_mul(Q64)
        .and_then(|hi| hi.checked_add(term_hl))
        .and_then(|acc| acc.checked_add(term_lh))
        .and_then(|acc| acc.checked_add(term_ll >> 64))
        .ok_or(QuoteError::ArithmeticOverflow)?;

    // Only the low limb product reaches the discarded fractional bits.
    if rounding == Rounding::Up && term_ll & Q64_MASK != 0 {
        result.checked_add(1).ok_or(QuoteError::ArithmeticOverflow)
    } else {
        Ok(result)
    }
}

/// Divide in Q64.64 format: (a * 2^64) / b
pub fn div_q64(env: &Env, a: u128, b: u128, rounding: Rounding) -> Result<u128, QuoteError> {
    mul_div(env, a, Q64, b, rounding)
}

/// Calculates (a * b) / denominator with a 256-bit intermediate
///
/// Products that fit in 128 bits stay native; larger ones go through the
/// host `U256`.
pub fn mul_div(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
    rounding: Rounding,
) -> Result<u128, QuoteError> {
    if denominator == 0 {
        return Err(QuoteError::DivisionByZero);
    }

    if let Some(product) = a.checked_mul(b) {
        let quotient = product / denominator;
        if rounding == Rounding::Up && product % denominator != 0 {
            return quotient.checked_add(1).ok_or(QuoteError::ArithmeticOverflow);
        }
        return Ok(quotient);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let den_256 = U256::from_u128(env, denominator);

    let quotient = product
        .div(&den_256)
        .to_u128()
        .ok_or(QuoteError::ArithmeticOverflow)?;

    if rounding == Rounding::Up && product.rem_euclid(&den_256) != U256::from_u32(env, 0) {
        quotient.checked_add(1).ok_or(QuoteError::ArithmeticOverflow)
    } else {
        Ok(quotient)
    }
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> Result<u128, QuoteError> {
    if denominator == 0 {
        return Err(QuoteError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        Ok(result + 1)
    } else {
        Ok(result)
    }
}

/// Square root of a Q64.64 number, returning Q64.64 result
///
/// Computes isqrt(x * 2^64) over the 192-bit radicand two bits at a time.
/// The root is below 2^96 and the running remainder below 2^99, so every
/// intermediate fits in a u128. Never fails.
pub fn sqrt_q64(x: u128, rounding: Rounding) -> u128 {
    let mut remainder: u128 = 0;
    let mut root: u128 = 0;

    // 96 bit pairs: the top 64 pairs come from `x`, the low 32 pairs are the
    // zero fractional extension.
    for pair_index in (0..96u32).rev() {
        let shift = pair_index * 2;
        let pair = if shift >= 64 { (x >> (shift - 64)) & 0b11 } else { 0 };

        remainder = (remainder << 2) | pair;
        root <<= 1;

        let trial = (root << 1) | 1;
        if remainder >= trial {
            remainder -= trial;
            root |= 1;
        }
    }

    if rounding == Rounding::Up && remainder != 0 {
        root + 1
    } else {
        root
    }
}
