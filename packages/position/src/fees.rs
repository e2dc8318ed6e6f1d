use soroban_sdk::Env;
use tidepool_math::{mul_div, QuoteError, Rounding, Q64};
use tidepool_swap::PoolSnapshot;
use tidepool_tick::{get_fee_growth_inside, TickSlot};
use tidepool_transfer_fee::{exclude_fee, TransferFeeConfig};
use crate::types::{CollectFeesQuote, PositionSnapshot};

/// Tokens earned by `liquidity` since `checkpoint`: floor(liquidity * (inside - checkpoint) / 2^64)
///
/// Growth wraps modulo 2^128, so the delta does too.
pub(crate) fn owed_since_checkpoint(
    env: &Env,
    liquidity: u128,
    growth_inside: u128,
    checkpoint: u128,
) -> Result<u128, QuoteError> {
    let delta = growth_inside.wrapping_sub(checkpoint);
    mul_div(env, liquidity, delta, Q64, Rounding::Down)
}

/// Fees a position could collect at the pool's current fee growth
///
/// # Arguments
/// * `pool` - Pool state at quote time
/// * `position` - Position state at quote time
/// * `tick_lower` / `tick_upper` - Slots of the position's boundary ticks
/// * `transfer_fee_a` / `transfer_fee_b` - Transfer fee schedules, `None` for plain tokens
/// * `epoch` - Epoch selecting the transfer fee in force
pub fn collect_fees_quote(
    env: &Env,
    pool: &PoolSnapshot,
    position: &PositionSnapshot,
    tick_lower: &TickSlot,
    tick_upper: &TickSlot,
    transfer_fee_a: Option<&TransferFeeConfig>,
    transfer_fee_b: Option<&TransferFeeConfig>,
    epoch: u64,
) -> Result<CollectFeesQuote, QuoteError> {
    let (inside_a, inside_b) = get_fee_growth_inside(
        pool.tick_current_index,
        position.tick_lower_index,
        position.tick_upper_index,
        tick_lower,
        tick_upper,
        pool.fee_growth_global_a,
        pool.fee_growth_global_b,
    );

    let owed_a = owed_since_checkpoint(env, position.liquidity, inside_a, position.fee_growth_checkpoint_a)?
        .checked_add(position.fee_owed_a)
        .ok_or(QuoteError::ArithmeticOverflow)?;
    let owed_b = owed_since_checkpoint(env, position.liquidity, inside_b, position.fee_growth_checkpoint_b)?
        .checked_add(position.fee_owed_b)
        .ok_or(QuoteError::ArithmeticOverflow)?;

    let withdrawable_a = exclude_fee(transfer_fee_a, epoch, owed_a)?;
    let withdrawable_b = exclude_fee(transfer_fee_b, epoch, owed_b)?;

    Ok(CollectFeesQuote {
        fee_owed_a: withdrawable_a.amount,
        fee_owed_b: withdrawable_b.amount,
        transfer_fee_a: withdrawable_a.fee,
        transfer_fee_b: withdrawable_b.fee,
    })
}
