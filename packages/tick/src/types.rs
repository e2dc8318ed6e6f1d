// Tick Types

use soroban_sdk::{contracttype, Env, Vec};

/// Snapshot of one tick slot inside a tick array
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickSlot {
    /// Whether any position references this tick
    pub initialized: bool,
    /// Net liquidity change when crossing left-to-right
    pub liquidity_net: i128,
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Fee growth outside this tick for token A (Q64.64)
    pub fee_growth_outside_a: u128,
    /// Fee growth outside this tick for token B (Q64.64)
    pub fee_growth_outside_b: u128,
    /// Reward growth outside this tick, one entry per reward slot (Q64.64)
    pub reward_growths_outside: Vec<u128>,
}

impl TickSlot {
    /// An uninitialized slot with every growth at zero
    pub fn empty(env: &Env) -> Self {
        Self {
            initialized: false,
            liquidity_net: 0,
            liquidity_gross: 0,
            fee_growth_outside_a: 0,
            fee_growth_outside_b: 0,
            reward_growths_outside: Vec::new(env),
        }
    }

    /// Reward growth outside for `reward_index`, zero when the slot carries none
    #[inline]
    pub fn reward_growth_outside(&self, reward_index: u32) -> u128 {
        self.reward_growths_outside.get(reward_index).unwrap_or(0)
    }
}

/// Snapshot of a tick array: TICK_ARRAY_SIZE consecutive slots
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickArraySnapshot {
    /// Tick index of slot 0, a multiple of TICK_ARRAY_SIZE * tick_spacing
    pub start_tick_index: i32,
    /// Slot `i` holds tick `start_tick_index + i * tick_spacing`
    pub ticks: Vec<TickSlot>,
}

/// A tick the swap loop must stop at
///
/// `slot` is `None` for the boundary at the edge of the supplied tick data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickBoundary {
    pub tick_index: i32,
    pub slot: Option<TickSlot>,
}
