// Fee and Reward Growth Inside a Tick Range

use soroban_sdk::{Env, Vec};
use crate::types::TickSlot;

/// Growth accumulated below and above a range, from one global value and the
/// two boundary ticks' outside values. Accumulators wrap modulo 2^128.
#[inline]
fn growth_inside(
    tick_current: i32,
    tick_lower: i32,
    tick_upper: i32,
    outside_lower: u128,
    outside_upper: u128,
    growth_global: u128,
) -> u128 {
    let growth_below = if tick_current >= tick_lower {
        outside_lower
    } else {
        growth_global.wrapping_sub(outside_lower)
    };

    let growth_above = if tick_current < tick_upper {
        outside_upper
    } else {
        growth_global.wrapping_sub(outside_upper)
    };

    growth_global
        .wrapping_sub(growth_below)
        .wrapping_sub(growth_above)
}

/// Fee growth inside [tick_lower, tick_upper) for both tokens
///
/// An uninitialized boundary contributes zero outside growth.
pub fn get_fee_growth_inside(
    tick_current: i32,
    tick_lower: i32,
    tick_upper: i32,
    lower: &TickSlot,
    upper: &TickSlot,
    fee_growth_global_a: u128,
    fee_growth_global_b: u128,
) -> (u128, u128) {
    let (lower_a, lower_b) = if lower.initialized {
        (lower.fee_growth_outside_a, lower.fee_growth_outside_b)
    } else {
        (0, 0)
    };
    let (upper_a, upper_b) = if upper.initialized {
        (upper.fee_growth_outside_a, upper.fee_growth_outside_b)
    } else {
        (0, 0)
    };

    (
        growth_inside(tick_current, tick_lower, tick_upper, lower_a, upper_a, fee_growth_global_a),
        growth_inside(tick_current, tick_lower, tick_upper, lower_b, upper_b, fee_growth_global_b),
    )
}

/// Reward growth inside [tick_lower, tick_upper), one entry per global growth
pub fn get_reward_growths_inside(
    env: &Env,
    tick_current: i32,
    tick_lower: i32,
    tick_upper: i32,
    lower: &TickSlot,
    upper: &TickSlot,
    reward_growths_global: &Vec<u128>,
) -> Vec<u128> {
    let mut inside = Vec::new(env);

    for (i, growth_global) in reward_growths_global.iter().enumerate() {
        let index = i as u32;
        let outside_lower = if lower.initialized { lower.reward_growth_outside(index) } else { 0 };
        let outside_upper = if upper.initialized { upper.reward_growth_outside(index) } else { 0 };

        inside.push_back(growth_inside(
            tick_current,
            tick_lower,
            tick_upper,
            outside_lower,
            outside_upper,
            growth_global,
        ));
    }

    inside
}
