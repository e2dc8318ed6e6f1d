use soroban_sdk::{contracttype, Vec};
use tidepool_math::{
    is_tick_index_in_bounds, QuoteError, MAX_FEE_RATE_BPS, MAX_PROTOCOL_FEE_RATE_BPS, MAX_SQRT_PRICE,
    MIN_SQRT_PRICE,
};
use tidepool_tick::TickArraySnapshot;
use tidepool_transfer_fee::TransferFeeConfig;

// ============================================================
// POOL SNAPSHOT
// ============================================================

/// Emission state of one pool reward slot
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardInfo {
    pub initialized: bool,
    /// Tokens emitted per second, Q64.64
    pub emissions_per_second_x64: u128,
    /// Reward growth per unit of liquidity, Q64.64
    pub growth_global_x64: u128,
}

/// Read-only pool state a quote is computed against
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolSnapshot {
    pub sqrt_price: u128,
    pub tick_current_index: i32,
    pub tick_spacing: u32,
    pub liquidity: u128,
    pub fee_rate_bps: u32,
    pub protocol_fee_rate_bps: u32,
    pub fee_growth_global_a: u128,
    pub fee_growth_global_b: u128,
    pub reward_last_updated_timestamp: u64,
    pub reward_infos: Vec<RewardInfo>,
}

impl PoolSnapshot {
    /// Check price, tick and fee rates against protocol bounds
    pub fn validate(&self) -> Result<(), QuoteError> {
        if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&self.sqrt_price) {
            return Err(QuoteError::SqrtPriceOutOfBounds);
        }
        if !is_tick_index_in_bounds(self.tick_current_index) {
            return Err(QuoteError::TickIndexOutOfBounds);
        }
        if self.fee_rate_bps > MAX_FEE_RATE_BPS
            || self.protocol_fee_rate_bps > MAX_PROTOCOL_FEE_RATE_BPS
        {
            return Err(QuoteError::InvalidFeeRate);
        }
        Ok(())
    }
}

// ============================================================
// SWAP REQUEST AND RESULT
// ============================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapOutcome {
    /// The whole specified amount was traded
    Filled,
    /// The price limit stopped the swap with amount left over
    PriceLimited,
}

/// One swap request, exact input or exact output
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapRequest {
    pub amount: u128,
    pub amount_specified_is_input: bool,
    pub a_to_b: bool,
    /// 0 means no limit
    pub sqrt_price_limit: u128,
    pub slippage_tolerance_bps: u32,
}

/// Result of a single-pool swap quote
///
/// `amount_in` is what the trader sends and `amount_out` what the trader
/// receives, both after transfer fees.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub amount_in: u128,
    pub amount_out: u128,
    /// Minimum output (exact input) or maximum input (exact output)
    pub other_amount_threshold: u128,
    pub sqrt_price_limit: u128,
    pub end_sqrt_price: u128,
    pub end_tick_index: i32,
    /// Swap fee in input token units
    pub trade_fee: u128,
    pub protocol_fee: u128,
    pub lp_fee: u128,
    pub transfer_fee_in: u128,
    pub transfer_fee_out: u128,
    pub a_to_b: bool,
    pub amount_specified_is_input: bool,
    pub outcome: SwapOutcome,
    pub tick_array_start_indexes: Vec<i32>,
}

// ============================================================
// TWO-HOP
// ============================================================

/// One pool of a two-hop route
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapHop {
    pub pool: PoolSnapshot,
    pub tick_arrays: Vec<TickArraySnapshot>,
    pub a_to_b: bool,
}

/// Transfer fee schedules of the three mints on a two-hop route
///
/// Caller-side argument only, never stored or passed to a contract.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TwoHopTransferFees {
    pub input: Option<TransferFeeConfig>,
    pub intermediate: Option<TransferFeeConfig>,
    pub output: Option<TransferFeeConfig>,
}

/// Result of a two-hop quote
///
/// `quote_one.amount_out` and `quote_two.amount_in` are both the intermediate
/// amount the second pool receives.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TwoHopQuote {
    pub quote_one: SwapQuote,
    pub quote_two: SwapQuote,
    pub amount_in: u128,
    pub amount_out: u128,
    pub other_amount_threshold: u128,
    pub amount_specified_is_input: bool,
}
