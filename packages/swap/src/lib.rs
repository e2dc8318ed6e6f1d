// Tidepool Swap Package

#![no_std]

pub mod types;
pub mod step;
pub mod engine;
pub mod quote;
pub mod two_hop;

// Re-export types
pub use types::{
    PoolSnapshot, RewardInfo, SwapHop, SwapOutcome, SwapQuote, SwapRequest, TwoHopQuote,
    TwoHopTransferFees,
};

// Re-export the swap loop
pub use step::{apply_swap_fee, compute_swap_step, reverse_apply_swap_fee, SwapStepQuote};
pub use engine::{compute_swap, resolve_sqrt_price_limit, SwapComputation};

// Re-export quote entry points
pub use quote::{
    get_max_amount_with_slippage_tolerance, get_min_amount_with_slippage_tolerance, quote_swap,
    swap_quote_by_input_token, swap_quote_by_output_token,
};
pub use two_hop::{two_hop_quote_by_input_token, two_hop_quote_by_output_token};

pub use tidepool_math::QuoteError;
