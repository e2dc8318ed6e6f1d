#![allow(dead_code)]

use soroban_sdk::{vec, Env, Vec};
use tidepool_math::TICK_ARRAY_SIZE;
use tidepool_tick::{TickArraySnapshot, TickSlot};

pub const TICK_SPACING: u32 = 2;

/// Initialized slot with the given net liquidity
pub fn initialized_slot(env: &Env, liquidity_net: i128) -> TickSlot {
    TickSlot {
        initialized: true,
        liquidity_net,
        liquidity_gross: liquidity_net.unsigned_abs(),
        fee_growth_outside_a: 0,
        fee_growth_outside_b: 0,
        reward_growths_outside: vec![env, 0u128, 0u128, 0u128],
    }
}

/// Tick array with every slot uninitialized
pub fn empty_array(env: &Env, start_tick_index: i32) -> TickArraySnapshot {
    let mut ticks = Vec::new(env);
    for _ in 0..TICK_ARRAY_SIZE {
        ticks.push_back(TickSlot::empty(env));
    }
    TickArraySnapshot { start_tick_index, ticks }
}

/// Tick array with the listed `(tick_index, liquidity_net)` slots initialized
pub fn array_with(
    env: &Env,
    start_tick_index: i32,
    tick_spacing: u32,
    initialized: &[(i32, i128)],
) -> TickArraySnapshot {
    let mut array = empty_array(env, start_tick_index);
    for (tick_index, liquidity_net) in initialized {
        let slot = ((tick_index - start_tick_index) / tick_spacing as i32) as u32;
        array.ticks.set(slot, initialized_slot(env, *liquidity_net));
    }
    array
}

/// Five arrays around tick 0 with one initialized tick near each array edge
pub fn five_arrays(env: &Env) -> Vec<TickArraySnapshot> {
    vec![
        env,
        array_with(env, 0, TICK_SPACING, &[(0, 1000), (174, -1000)]),
        array_with(env, 176, TICK_SPACING, &[(176, 1000), (350, -1000)]),
        array_with(env, 352, TICK_SPACING, &[(352, 1000), (526, -1000)]),
        array_with(env, -176, TICK_SPACING, &[(-176, 1000), (-2, -1000)]),
        array_with(env, -352, TICK_SPACING, &[(-352, 1000), (-178, -1000)]),
    ]
}
