// Reward Accrual Quotes

use soroban_sdk::{Env, Vec};
use tidepool_math::{mul_div, QuoteError, Rounding, NUM_REWARDS};
use tidepool_swap::PoolSnapshot;
use tidepool_tick::{get_reward_growths_inside, TickSlot};
use tidepool_transfer_fee::{exclude_fee, TransferFeeConfig};
use crate::fees::owed_since_checkpoint;
use crate::types::{CollectRewardQuote, CollectRewardsQuote, PositionSnapshot};

/// Global reward growths extrapolated to `current_timestamp`
///
/// Each initialized slot grows by emissions * elapsed / liquidity. With no
/// liquidity in range nothing is distributed.
pub fn get_reward_growths_global(
    env: &Env,
    pool: &PoolSnapshot,
    current_timestamp: u64,
) -> Result<Vec<u128>, QuoteError> {
    let elapsed = current_timestamp
        .checked_sub(pool.reward_last_updated_timestamp)
        .ok_or(QuoteError::InvalidTimestamp)?;

    let mut growths = Vec::new(env);
    for reward in pool.reward_infos.iter().take(NUM_REWARDS as usize) {
        let growth = if reward.initialized && pool.liquidity > 0 && elapsed > 0 {
            let delta = mul_div(
                env,
                reward.emissions_per_second_x64,
                elapsed as u128,
                pool.liquidity,
                Rounding::Down,
            )?;
            reward.growth_global_x64.wrapping_add(delta)
        } else {
            reward.growth_global_x64
        };
        growths.push_back(growth);
    }
    Ok(growths)
}

/// Rewards a position could collect at `current_timestamp`
///
/// `transfer_fees[i]` is the schedule of reward slot `i`'s mint; a missing
/// entry means no transfer fee. Uninitialized slots report what the position
/// already has owed.
pub fn collect_rewards_quote(
    env: &Env,
    pool: &PoolSnapshot,
    position: &PositionSnapshot,
    tick_lower: &TickSlot,
    tick_upper: &TickSlot,
    current_timestamp: u64,
    transfer_fees: &[Option<TransferFeeConfig>],
    epoch: u64,
) -> Result<CollectRewardsQuote, QuoteError> {
    let growths_global = get_reward_growths_global(env, pool, current_timestamp)?;
    let growths_inside = get_reward_growths_inside(
        env,
        pool.tick_current_index,
        position.tick_lower_index,
        position.tick_upper_index,
        tick_lower,
        tick_upper,
        &growths_global,
    );

    let mut rewards = Vec::new(env);
    for (i, reward) in pool.reward_infos.iter().take(NUM_REWARDS as usize).enumerate() {
        let index = i as u32;
        let checkpoint = position.reward_info(index);

        let owed = if reward.initialized {
            let inside = growths_inside.get(index).unwrap_or(0);
            owed_since_checkpoint(env, position.liquidity, inside, checkpoint.growth_inside_checkpoint)?
                .checked_add(checkpoint.amount_owed)
                .ok_or(QuoteError::ArithmeticOverflow)?
        } else {
            checkpoint.amount_owed
        };

        let transfer_fee = transfer_fees.get(i).and_then(|config| config.as_ref());
        let withdrawable = exclude_fee(transfer_fee, epoch, owed)?;
        rewards.push_back(CollectRewardQuote {
            rewards_owed: withdrawable.amount,
            transfer_fee: withdrawable.fee,
        });
    }

    Ok(CollectRewardsQuote { rewards })
}
