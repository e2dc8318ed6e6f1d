// Tidepool Position Package

#![no_std]

pub mod types;
pub mod fees;
pub mod rewards;
pub mod liquidity;

pub use types::{
    CollectFeesQuote, CollectRewardQuote, CollectRewardsQuote, DecreaseLiquidityQuote,
    IncreaseLiquidityQuote, PositionRewardInfo, PositionSnapshot, PositionStatus,
};
pub use fees::collect_fees_quote;
pub use rewards::{collect_rewards_quote, get_reward_growths_global};
pub use liquidity::{
    decrease_liquidity_quote, increase_liquidity_quote, position_status, validate_position_range,
};

pub use tidepool_math::QuoteError;
