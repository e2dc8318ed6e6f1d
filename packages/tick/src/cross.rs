// Tick Crossing

use tidepool_math::QuoteError;

/// Active liquidity after crossing a tick with `liquidity_net`
///
/// Moving down (a_to_b) removes the net liquidity, moving up adds it.
pub fn cross_tick_liquidity(
    liquidity: u128,
    liquidity_net: i128,
    a_to_b: bool,
) -> Result<u128, QuoteError> {
    let delta = if a_to_b {
        liquidity_net.checked_neg().ok_or(QuoteError::ArithmeticOverflow)?
    } else {
        liquidity_net
    };

    if delta >= 0 {
        liquidity
            .checked_add(delta.unsigned_abs())
            .ok_or(QuoteError::ArithmeticOverflow)
    } else {
        liquidity
            .checked_sub(delta.unsigned_abs())
            .ok_or(QuoteError::ArithmeticOverflow)
    }
}

/// Current tick once the price sits exactly on `tick_index` after a crossing
#[inline]
pub fn tick_after_cross(tick_index: i32, a_to_b: bool) -> i32 {
    if a_to_b {
        tick_index - 1
    } else {
        tick_index
    }
}
