#![allow(dead_code)]

use soroban_sdk::{vec, Env, Vec};
use tidepool_math::{tick_index_to_sqrt_price, SQRT_PRICE_1_1, TICK_ARRAY_SIZE};
use tidepool_swap::{PoolSnapshot, RewardInfo, SwapHop};
use tidepool_tick::{TickArraySnapshot, TickSlot};

pub const TICK_SPACING: u32 = 64;
pub const FEE_RATE_BPS: u32 = 30;
pub const PROTOCOL_FEE_RATE_BPS: u32 = 1000;

// Liquidity layout of the main pool:
//   [-2048, 2048)  1_000_000_000_000
//   [-640, 640)      500_000_000_000
pub const WIDE_LIQUIDITY: i128 = 1_000_000_000_000;
pub const NARROW_LIQUIDITY: i128 = 500_000_000_000;

pub fn initialized_slot(env: &Env, liquidity_net: i128) -> TickSlot {
    TickSlot {
        initialized: true,
        liquidity_net,
        liquidity_gross: liquidity_net.unsigned_abs(),
        fee_growth_outside_a: 0,
        fee_growth_outside_b: 0,
        reward_growths_outside: Vec::new(env),
    }
}

pub fn empty_array(env: &Env, start_tick_index: i32) -> TickArraySnapshot {
    let mut ticks = Vec::new(env);
    for _ in 0..TICK_ARRAY_SIZE {
        ticks.push_back(TickSlot::empty(env));
    }
    TickArraySnapshot { start_tick_index, ticks }
}

/// Four arrays covering [-11264, 11263] with the listed ticks initialized
pub fn tick_arrays_with(env: &Env, initialized: &[(i32, i128)]) -> Vec<TickArraySnapshot> {
    let ticks_in_array = TICK_ARRAY_SIZE * TICK_SPACING as i32;
    let mut arrays = Vec::new(env);
    for start in [-2 * ticks_in_array, -ticks_in_array, 0, ticks_in_array] {
        let mut array = empty_array(env, start);
        for (tick_index, liquidity_net) in initialized {
            if *tick_index >= start && *tick_index < start + ticks_in_array {
                let slot = ((tick_index - start) / TICK_SPACING as i32) as u32;
                array.ticks.set(slot, initialized_slot(env, *liquidity_net));
            }
        }
        arrays.push_back(array);
    }
    arrays
}

pub fn tick_arrays(env: &Env) -> Vec<TickArraySnapshot> {
    tick_arrays_with(
        env,
        &[
            (-2048, WIDE_LIQUIDITY),
            (-640, NARROW_LIQUIDITY),
            (640, -NARROW_LIQUIDITY),
            (2048, -WIDE_LIQUIDITY),
        ],
    )
}

/// Pool at price 1.0 with both positions active
pub fn pool(env: &Env) -> PoolSnapshot {
    PoolSnapshot {
        sqrt_price: SQRT_PRICE_1_1,
        tick_current_index: 0,
        tick_spacing: TICK_SPACING,
        liquidity: (WIDE_LIQUIDITY + NARROW_LIQUIDITY) as u128,
        fee_rate_bps: FEE_RATE_BPS,
        protocol_fee_rate_bps: PROTOCOL_FEE_RATE_BPS,
        fee_growth_global_a: 0,
        fee_growth_global_b: 0,
        reward_last_updated_timestamp: 0,
        reward_infos: vec![
            env,
            RewardInfo {
                initialized: false,
                emissions_per_second_x64: 0,
                growth_global_x64: 0,
            },
        ],
    }
}

/// Second pool at tick 1000 with one position over [-4096, 4096)
pub fn second_pool(env: &Env) -> (PoolSnapshot, Vec<TickArraySnapshot>) {
    let pool = PoolSnapshot {
        sqrt_price: tick_index_to_sqrt_price(1000).unwrap(),
        tick_current_index: 1000,
        tick_spacing: TICK_SPACING,
        liquidity: 2_000_000_000_000,
        fee_rate_bps: 100,
        protocol_fee_rate_bps: 2000,
        fee_growth_global_a: 0,
        fee_growth_global_b: 0,
        reward_last_updated_timestamp: 0,
        reward_infos: Vec::new(env),
    };
    let arrays = tick_arrays_with(env, &[(-4096, 2_000_000_000_000), (4096, -2_000_000_000_000)]);
    (pool, arrays)
}

/// Hop one sells A for B on the main pool, hop two sells that B on the second pool
pub fn route(env: &Env) -> (SwapHop, SwapHop) {
    let (pool_two, arrays_two) = second_pool(env);
    (
        SwapHop {
            pool: pool(env),
            tick_arrays: tick_arrays(env),
            a_to_b: true,
        },
        SwapHop {
            pool: pool_two,
            tick_arrays: arrays_two,
            a_to_b: false,
        },
    )
}
