// Tidepool Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod q64;
pub mod tick_math;
pub mod sqrt_price;
pub mod liquidity;

pub use constants::*;
pub use error::QuoteError;

pub use q64::{div_q64, div_round_up, mul_div, mul_q64, sqrt_q64, Rounding, ONE_X64};

pub use tick_math::{
    get_initializable_tick_index,
    get_next_initializable_tick_index,
    get_prev_initializable_tick_index,
    get_tick_array_start_tick_index,
    is_tick_index_in_bounds,
    is_tick_initializable,
    price_to_sqrt_price,
    sqrt_price_to_price,
    sqrt_price_to_tick_index,
    tick_index_to_sqrt_price,
    validate_tick_spacing,
};

pub use sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};

pub use liquidity::{
    get_amount_delta_a,
    get_amount_delta_b,
    get_amounts_for_liquidity,
    get_liquidity_for_amount_a,
    get_liquidity_for_amount_b,
    get_liquidity_for_amounts,
};
