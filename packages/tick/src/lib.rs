#![no_std]

pub mod types;
pub mod sequence;
pub mod cross;
pub mod growth;

pub use types::{TickArraySnapshot, TickBoundary, TickSlot};
pub use sequence::{TickBoundaries, TickSequence};
pub use cross::{cross_tick_liquidity, tick_after_cross};
pub use growth::{get_fee_growth_inside, get_reward_growths_inside};

// Re-export from math
pub use tidepool_math::QuoteError;
