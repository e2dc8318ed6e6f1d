use soroban_sdk::{contracttype, Vec};

/// Reward checkpoint of a position for one reward slot
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionRewardInfo {
    pub growth_inside_checkpoint: u128,
    pub amount_owed: u128,
}

/// Read-only position state a quote is computed against
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionSnapshot {
    pub liquidity: u128,
    pub tick_lower_index: i32,
    pub tick_upper_index: i32,
    pub fee_growth_checkpoint_a: u128,
    pub fee_growth_checkpoint_b: u128,
    pub fee_owed_a: u128,
    pub fee_owed_b: u128,
    pub reward_infos: Vec<PositionRewardInfo>,
}

impl PositionSnapshot {
    /// Reward checkpoint for `reward_index`, zero when the position has none
    pub fn reward_info(&self, reward_index: u32) -> PositionRewardInfo {
        self.reward_infos.get(reward_index).unwrap_or_default()
    }
}

/// Where the pool price sits relative to a position's range
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionStatus {
    /// Pool tick below the range: the position holds only token A
    BelowRange,
    InRange,
    /// Pool tick at or above the upper tick: the position holds only token B
    AboveRange,
}

// ============================================================
// QUOTE RESULTS
// ============================================================

/// Fees a position can withdraw, after transfer fees
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CollectFeesQuote {
    pub fee_owed_a: u128,
    pub fee_owed_b: u128,
    pub transfer_fee_a: u128,
    pub transfer_fee_b: u128,
}

/// Reward a position can withdraw from one slot, after the transfer fee
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CollectRewardQuote {
    pub rewards_owed: u128,
    pub transfer_fee: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectRewardsQuote {
    /// One entry per pool reward slot
    pub rewards: Vec<CollectRewardQuote>,
}

/// Tokens required to add liquidity
///
/// Estimates include the transfer fee; maxima add the slippage tolerance.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IncreaseLiquidityQuote {
    pub liquidity_delta: u128,
    pub token_est_a: u128,
    pub token_est_b: u128,
    pub token_max_a: u128,
    pub token_max_b: u128,
    pub transfer_fee_a: u128,
    pub transfer_fee_b: u128,
}

/// Tokens released by removing liquidity
///
/// Estimates exclude the transfer fee; minima subtract the slippage tolerance.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DecreaseLiquidityQuote {
    pub liquidity_delta: u128,
    pub token_est_a: u128,
    pub token_est_b: u128,
    pub token_min_a: u128,
    pub token_min_b: u128,
    pub transfer_fee_a: u128,
    pub transfer_fee_b: u128,
}
