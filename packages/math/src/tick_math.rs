// SPDX-License-Identifier: MIT
// Tick Index <-> Sqrt Price Conversion

use crate::constants::{
    MAX_SQRT_PRICE, MAX_TICK_INDEX, MAX_TICK_SPACING, MIN_SQRT_PRICE, MIN_TICK_INDEX, Q64, TICK_ARRAY_SIZE,
};
use crate::error::QuoteError;
use crate::q64::{mul_q64, sqrt_q64, Rounding};

/// Per-bit multipliers: `TICK_LADDER[i] = floor(2^64 / sqrt(1.0001^(2^i)))`
///
/// Reproduced by `scripts/tick_vectors.py`. Bit 19 is outside the supported
/// tick range and is kept only so the ladder covers every bit-group vector.
pub const TICK_LADDER: [u128; 20] = [
    18445821805675392311,
    18444899583751176498,
    18443055278223354162,
    18439367220385604838,
    18431993317065449817,
    18417254355718160513,
    18387811781193591352,
    18329067761203520168,
    18212142134806087854,
    17980523815641551639,
    17526086738831147013,
    16651378430235024244,
    15030750278693429944,
    12247334978882834399,
    8131365268884726200,
    3584323654723342297,
    696457651847595233,
    26294789957452057,
    37481735321082,
    76158723,
];

/// Convert tick to sqrt price in Q64.64 format
/// Formula: sqrt(1.0001^tick) * 2^64
///
/// The ladder is applied to |tick|, giving the sqrt price of the negative
/// tick; positive ticks take the reciprocal.
pub fn tick_index_to_sqrt_price(tick_index: i32) -> Result<u128, QuoteError> {
    if !is_tick_index_in_bounds(tick_index) {
        return Err(QuoteError::TickIndexOutOfBounds);
    }

    if tick_index == 0 {
        return Ok(Q64);
    }

    let abs_tick = tick_index.unsigned_abs();
    let mut ratio: u128 = Q64;

    for (bit, step) in TICK_LADDER.iter().enumerate() {
        if abs_tick & (1u32 << bit) != 0 {
            // ratio <= 2^64 and step < 2^64, so the product fits.
            ratio = (ratio * step) >> 64;
        }
    }

    if tick_index > 0 {
        Ok(u128::MAX / ratio)
    } else {
        Ok(ratio)
    }
}

/// Convert a sqrt price to the greatest tick whose sqrt price is <= it
pub fn sqrt_price_to_tick_index(sqrt_price: u128) -> Result<i32, QuoteError> {
    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price) {
        return Err(QuoteError::SqrtPriceOutOfBounds);
    }

    let mut low = MIN_TICK_INDEX;
    let mut high = MAX_TICK_INDEX;

    // Invariant: tick_index_to_sqrt_price(low) <= sqrt_price
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if tick_index_to_sqrt_price(mid)? <= sqrt_price {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Convert a Q64.64 price to its Q64.64 sqrt price
pub fn price_to_sqrt_price(price_x64: u128) -> Result<u128, QuoteError> {
    let sqrt_price = sqrt_q64(price_x64, Rounding::Down);
    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price) {
        return Err(QuoteError::SqrtPriceOutOfBounds);
    }
    Ok(sqrt_price)
}

/// Convert a Q64.64 sqrt price to its Q64.64 price
pub fn sqrt_price_to_price(sqrt_price: u128) -> Result<u128, QuoteError> {
    mul_q64(sqrt_price, sqrt_price, Rounding::Down)
}

// ============================================================
// TICK SPACING HELPERS
// ============================================================

/// Check if a tick is within valid range
#[inline]
pub fn is_tick_index_in_bounds(tick_index: i32) -> bool {
    (MIN_TICK_INDEX..=MAX_TICK_INDEX).contains(&tick_index)
}

/// Reject a tick spacing outside 1..=MAX_TICK_SPACING
pub fn validate_tick_spacing(tick_spacing: u32) -> Result<i32, QuoteError> {
    if tick_spacing == 0 || tick_spacing > MAX_TICK_SPACING {
        return Err(QuoteError::InvalidTickSpacing);
    }
    Ok(tick_spacing as i32)
}

/// Grid helpers below fail with `InvalidTickSpacing` for a spacing outside 1..=MAX_TICK_SPACING
#[inline]
pub fn is_tick_initializable(tick_index: i32, tick_spacing: u32) -> Result<bool, QuoteError> {
    let spacing = validate_tick_spacing(tick_spacing)?;
    Ok(tick_index.rem_euclid(spacing) == 0)
}

/// Snap a tick onto the spacing grid, rounding down or up
pub fn get_initializable_tick_index(
    tick_index: i32,
    tick_spacing: u32,
    round_up: bool,
) -> Result<i32, QuoteError> {
    let spacing = validate_tick_spacing(tick_spacing)?;
    let remainder = tick_index.rem_euclid(spacing);
    if remainder == 0 {
        Ok(tick_index)
    } else if round_up {
        Ok(tick_index - remainder + spacing)
    } else {
        Ok(tick_index - remainder)
    }
}

/// Smallest initializable tick strictly above `tick_index`
pub fn get_next_initializable_tick_index(tick_index: i32, tick_spacing: u32) -> Result<i32, QuoteError> {
    Ok(get_initializable_tick_index(tick_index, tick_spacing, false)? + tick_spacing as i32)
}

/// Greatest initializable tick strictly below `tick_index`
pub fn get_prev_initializable_tick_index(tick_index: i32, tick_spacing: u32) -> Result<i32, QuoteError> {
    Ok(get_initializable_tick_index(tick_index, tick_spacing, true)? - tick_spacing as i32)
}

/// Start index of the tick array that holds `tick_index`
pub fn get_tick_array_start_tick_index(tick_index: i32, tick_spacing: u32) -> Result<i32, QuoteError> {
    let ticks_in_array = TICK_ARRAY_SIZE * validate_tick_spacing(tick_spacing)?;
    Ok(tick_index.div_euclid(ticks_in_array) * ticks_in_array)
}
