// SPDX-License-Identifier: MIT
// Liquidity Quotes

use soroban_sdk::Env;
use tidepool_math::{
    get_amounts_for_liquidity, is_tick_index_in_bounds, is_tick_initializable,
    tick_index_to_sqrt_price, validate_tick_spacing, QuoteError,
};
use tidepool_swap::{
    get_max_amount_with_slippage_tolerance, get_min_amount_with_slippage_tolerance, PoolSnapshot,
};
use tidepool_transfer_fee::{exclude_fee, include_fee, TransferFeeConfig};
use crate::types::{DecreaseLiquidityQuote, IncreaseLiquidityQuote, PositionStatus};

/// Reject a range that is empty, out of bounds or off the spacing grid
pub fn validate_position_range(
    tick_lower_index: i32,
    tick_upper_index: i32,
    tick_spacing: u32,
) -> Result<(), QuoteError> {
    validate_tick_spacing(tick_spacing)?;

    if tick_lower_index >= tick_upper_index
        || !is_tick_index_in_bounds(tick_lower_index)
        || !is_tick_index_in_bounds(tick_upper_index)
        || !is_tick_initializable(tick_lower_index, tick_spacing)?
        || !is_tick_initializable(tick_upper_index, tick_spacing)?
    {
        return Err(QuoteError::InvalidPositionRange);
    }
    Ok(())
}

#[inline]
pub fn position_status(tick_current_index: i32, tick_lower_index: i32, tick_upper_index: i32) -> PositionStatus {
    if tick_current_index < tick_lower_index {
        PositionStatus::BelowRange
    } else if tick_current_index >= tick_upper_index {
        PositionStatus::AboveRange
    } else {
        PositionStatus::InRange
    }
}

/// Token amounts backing `liquidity_delta` over the range at the pool price
fn token_amounts(
    env: &Env,
    pool: &PoolSnapshot,
    liquidity_delta: u128,
    tick_lower_index: i32,
    tick_upper_index: i32,
    round_up: bool,
) -> Result<(u128, u128), QuoteError> {
    pool.validate()?;
    validate_position_range(tick_lower_index, tick_upper_index, pool.tick_spacing)?;

    get_amounts_for_liquidity(
        env,
        liquidity_delta,
        tick_index_to_sqrt_price(tick_lower_index)?,
        tick_index_to_sqrt_price(tick_upper_index)?,
        pool.sqrt_price,
        round_up,
    )
}

/// Quote the tokens needed to add `liquidity_delta` to a range
///
/// Amounts round up, then the transfer fee is added on top so the pool
/// receives them in full.
pub fn increase_liquidity_quote(
    env: &Env,
    liquidity_delta: u128,
    slippage_tolerance_bps: u32,
    pool: &PoolSnapshot,
    tick_lower_index: i32,
    tick_upper_index: i32,
    transfer_fee_a: Option<&TransferFeeConfig>,
    transfer_fee_b: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<IncreaseLiquidityQuote, QuoteError> {
    let (amount_a, amount_b) =
        token_amounts(env, pool, liquidity_delta, tick_lower_index, tick_upper_index, true)?;

    let est_a = include_fee(transfer_fee_a, epoch, amount_a)?;
    let est_b = include_fee(transfer_fee_b, epoch, amount_b)?;

    Ok(IncreaseLiquidityQuote {
        liquidity_delta,
        token_est_a: est_a.amount,
        token_est_b: est_b.amount,
        token_max_a: get_max_amount_with_slippage_tolerance(env, est_a.amount, slippage_tolerance_bps)?,
        token_max_b: get_max_amount_with_slippage_tolerance(env, est_b.amount, slippage_tolerance_bps)?,
        transfer_fee_a: est_a.fee,
        transfer_fee_b: est_b.fee,
    })
}

/// Quote the tokens released by removing `liquidity_delta` from a range
///
/// Amounts round down, then the transfer fee is taken from what the owner
/// receives.
pub fn decrease_liquidity_quote(
    env: &Env,
    liquidity_delta: u128,
    slippage_tolerance_bps: u32,
    pool: &PoolSnapshot,
    tick_lower_index: i32,
    tick_upper_index: i32,
    transfer_fee_a: Option<&TransferFeeConfig>,
    transfer_fee_b: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<DecreaseLiquidityQuote, QuoteError> {
    let (amount_a, amount_b) =
        token_amounts(env, pool, liquidity_delta, tick_lower_index, tick_upper_index, false)?;

    let est_a = exclude_fee(transfer_fee_a, epoch, amount_a)?;
    let est_b = exclude_fee(transfer_fee_b, epoch, amount_b)?;

    Ok(DecreaseLiquidityQuote {
        liquidity_delta,
        token_est_a: est_a.amount,
        token_est_b: est_b.amount,
        token_min_a: get_min_amount_with_slippage_tolerance(env, est_a.amount, slippage_tolerance_bps)?,
        token_min_b: get_min_amount_with_slippage_tolerance(env, est_b.amount, slippage_tolerance_bps)?,
        transfer_fee_a: est_a.fee,
        transfer_fee_b: est_b.fee,
    })
}
