#![allow(dead_code)]

use soroban_sdk::{vec, Env, Vec};
use tidepool_math::{Q64, SQRT_PRICE_1_1};
use tidepool_position::{PositionRewardInfo, PositionSnapshot};
use tidepool_swap::{PoolSnapshot, RewardInfo};
use tidepool_tick::TickSlot;

pub const TICK_SPACING: u32 = 64;
pub const POOL_LIQUIDITY: u128 = 1_000_000_000_000;

/// Pool at price 1.0 with three reward slots, the middle one unused
pub fn pool(env: &Env) -> PoolSnapshot {
    PoolSnapshot {
        sqrt_price: SQRT_PRICE_1_1,
        tick_current_index: 0,
        tick_spacing: TICK_SPACING,
        liquidity: POOL_LIQUIDITY,
        fee_rate_bps: 30,
        protocol_fee_rate_bps: 1000,
        fee_growth_global_a: 5 * Q64,
        fee_growth_global_b: 10,
        reward_last_updated_timestamp: 1_000,
        reward_infos: vec![
            env,
            RewardInfo {
                initialized: true,
                emissions_per_second_x64: 1_000_000 * Q64,
                growth_global_x64: 0,
            },
            RewardInfo {
                initialized: false,
                emissions_per_second_x64: 0,
                growth_global_x64: 0,
            },
            RewardInfo {
                initialized: true,
                emissions_per_second_x64: 3_000_000 * Q64,
                growth_global_x64: 0,
            },
        ],
    }
}

pub fn boundary_slot(env: &Env, fee_growth_outside_a: u128, fee_growth_outside_b: u128) -> TickSlot {
    TickSlot {
        initialized: true,
        liquidity_net: 0,
        liquidity_gross: 1,
        fee_growth_outside_a,
        fee_growth_outside_b,
        reward_growths_outside: vec![env, 0u128, 0u128, 0u128],
    }
}

pub fn reward_boundary_slot(env: &Env, reward_growths_outside: [u128; 3]) -> TickSlot {
    TickSlot {
        reward_growths_outside: vec![
            env,
            reward_growths_outside[0],
            reward_growths_outside[1],
            reward_growths_outside[2],
        ],
        ..boundary_slot(env, 0, 0)
    }
}

/// Position over [-640, 640) with the given checkpoints
pub fn position(env: &Env, liquidity: u128) -> PositionSnapshot {
    PositionSnapshot {
        liquidity,
        tick_lower_index: -640,
        tick_upper_index: 640,
        fee_growth_checkpoint_a: 0,
        fee_growth_checkpoint_b: 0,
        fee_owed_a: 0,
        fee_owed_b: 0,
        reward_infos: Vec::new(env),
    }
}

pub fn reward_checkpoint(growth_inside_checkpoint: u128, amount_owed: u128) -> PositionRewardInfo {
    PositionRewardInfo {
        growth_inside_checkpoint,
        amount_owed,
    }
}
