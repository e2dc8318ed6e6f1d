// Single Swap Step

use soroban_sdk::Env;
use tidepool_math::{
    get_amount_delta_a, get_amount_delta_b, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output, mul_div, QuoteError, Rounding, BPS_DENOMINATOR,
};

/// Amounts moved by one step between two prices
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwapStepQuote {
    pub amount_in: u128,
    pub amount_out: u128,
    pub next_sqrt_price: u128,
    /// Swap fee, always in input token units
    pub fee_amount: u128,
}

/// Amount left once the swap fee is taken: amount - ceil(amount * fee / 10000)
pub fn apply_swap_fee(env: &Env, amount: u128, fee_rate_bps: u32) -> Result<u128, QuoteError> {
    let fee = mul_div(env, amount, fee_rate_bps as u128, BPS_DENOMINATOR as u128, Rounding::Up)?;
    amount.checked_sub(fee).ok_or(QuoteError::InvalidFeeRate)
}

/// Amount that leaves `amount` once the swap fee is taken: ceil(amount * 10000 / (10000 - fee))
pub fn reverse_apply_swap_fee(env: &Env, amount: u128, fee_rate_bps: u32) -> Result<u128, QuoteError> {
    let remaining_bps = BPS_DENOMINATOR
        .checked_sub(fee_rate_bps)
        .ok_or(QuoteError::InvalidFeeRate)?;
    mul_div(env, amount, BPS_DENOMINATOR as u128, remaining_bps as u128, Rounding::Up)
}

/// Delta of the token whose amount is specified
fn amount_fixed_delta(
    env: &Env,
    current_sqrt_price: u128,
    target_sqrt_price: u128,
    liquidity: u128,
    a_to_b: bool,
    specified_input: bool,
) -> Result<u128, QuoteError> {
    if a_to_b == specified_input {
        get_amount_delta_a(env, current_sqrt_price, target_sqrt_price, liquidity, specified_input)
    } else {
        get_amount_delta_b(env, current_sqrt_price, target_sqrt_price, liquidity, specified_input)
    }
}

/// Delta of the other token, rounded against the trader
fn amount_unfixed_delta(
    env: &Env,
    current_sqrt_price: u128,
    target_sqrt_price: u128,
    liquidity: u128,
    a_to_b: bool,
    specified_input: bool,
) -> Result<u128, QuoteError> {
    if a_to_b == specified_input {
        get_amount_delta_b(env, current_sqrt_price, target_sqrt_price, liquidity, !specified_input)
    } else {
        get_amount_delta_a(env, current_sqrt_price, target_sqrt_price, liquidity, !specified_input)
    }
}

/// Compute one swap step from `current_sqrt_price` toward `target_sqrt_price`
///
/// # Arguments
/// * `amount_remaining` - Specified amount still to trade (input or output)
/// * `fee_rate_bps` - Pool swap fee
/// * `liquidity` - Active liquidity over the step
/// * `a_to_b` - Direction (true = token A in, price moves down)
/// * `specified_input` - Whether `amount_remaining` is an input amount
///
/// # Returns
/// The step's amounts and the price it ends at. The step ends at the target
/// when the remaining amount covers it, otherwise at the price the amount reaches.
pub fn compute_swap_step(
    env: &Env,
    amount_remaining: u128,
    fee_rate_bps: u32,
    liquidity: u128,
    current_sqrt_price: u128,
    target_sqrt_price: u128,
    a_to_b: bool,
    specified_input: bool,
) -> Result<SwapStepQuote, QuoteError> {
    // A delta too large for u128 only means the target is out of reach.
    let initial_fixed_delta = match amount_fixed_delta(
        env,
        current_sqrt_price,
        target_sqrt_price,
        liquidity,
        a_to_b,
        specified_input,
    ) {
        Ok(delta) => Some(delta),
        Err(QuoteError::AmountExceedsMax) => None,
        Err(err) => return Err(err),
    };

    let amount_calculated = if specified_input {
        apply_swap_fee(env, amount_remaining, fee_rate_bps)?
    } else {
        amount_remaining
    };

    let next_sqrt_price = match initial_fixed_delta {
        Some(delta) if delta <= amount_calculated => target_sqrt_price,
        _ if specified_input => {
            get_next_sqrt_price_from_input(env, current_sqrt_price, liquidity, amount_calculated, a_to_b)?
        }
        _ => get_next_sqrt_price_from_output(env, current_sqrt_price, liquidity, amount_calculated, a_to_b)?,
    };

    let is_max_swap = next_sqrt_price == target_sqrt_price;

    let amount_unfixed = amount_unfixed_delta(
        env,
        current_sqrt_price,
        next_sqrt_price,
        liquidity,
        a_to_b,
        specified_input,
    )?;

    let amount_fixed = match initial_fixed_delta {
        Some(delta) if is_max_swap => delta,
        _ => amount_fixed_delta(env, current_sqrt_price, next_sqrt_price, liquidity, a_to_b, specified_input)?,
    };

    let (amount_in, mut amount_out) = if specified_input {
        (amount_fixed, amount_unfixed)
    } else {
        (amount_unfixed, amount_fixed)
    };

    if !specified_input && amount_out > amount_remaining {
        amount_out = amount_remaining;
    }

    let fee_amount = if specified_input && !is_max_swap {
        amount_remaining
            .checked_sub(amount_in)
            .ok_or(QuoteError::ArithmeticOverflow)?
    } else {
        reverse_apply_swap_fee(env, amount_in, fee_rate_bps)? - amount_in
    };

    Ok(SwapStepQuote {
        amount_in,
        amount_out,
        next_sqrt_price,
        fee_amount,
    })
}
