use soroban_sdk::{log, Env, Vec};
use tidepool_math::{
    get_tick_array_start_tick_index, mul_div, sqrt_price_to_tick_index, tick_index_to_sqrt_price,
    QuoteError, Rounding, BPS_DENOMINATOR, MAX_SQRT_PRICE, MIN_SQRT_PRICE, TICK_ARRAY_SIZE,
};
use tidepool_tick::{cross_tick_liquidity, tick_after_cross, TickSequence};
use crate::step::compute_swap_step;
use crate::types::{PoolSnapshot, SwapOutcome};

// ============================================================
// SWAP COMPUTATION
// ============================================================

/// Pool-side result of running the swap loop
///
/// Amounts are what the pool receives and sends, before transfer fees.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapComputation {
    /// Input token consumed, swap fee included
    pub amount_in: u128,
    pub amount_out: u128,
    pub trade_fee: u128,
    pub protocol_fee: u128,
    pub lp_fee: u128,
    /// Resolved price limit (0 replaced by the protocol bound)
    pub sqrt_price_limit: u128,
    pub end_sqrt_price: u128,
    pub end_tick_index: i32,
    pub end_liquidity: u128,
    pub outcome: SwapOutcome,
    pub tick_array_start_indexes: Vec<i32>,
}

/// Replace a zero limit with the protocol bound and check it against the price
pub fn resolve_sqrt_price_limit(
    sqrt_price: u128,
    sqrt_price_limit: u128,
    a_to_b: bool,
) -> Result<u128, QuoteError> {
    let limit = match sqrt_price_limit {
        0 if a_to_b => MIN_SQRT_PRICE,
        0 => MAX_SQRT_PRICE,
        limit => limit,
    };

    if !(MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&limit) {
        return Err(QuoteError::SqrtPriceOutOfBounds);
    }
    if (a_to_b && limit >= sqrt_price) || (!a_to_b && limit <= sqrt_price) {
        return Err(QuoteError::InvalidSqrtPriceLimitDirection);
    }
    Ok(limit)
}

/// Run the swap loop against a pool snapshot
///
/// # Arguments
/// * `env` - Soroban environment
/// * `pool` - Pool state at quote time
/// * `sequence` - Tick arrays covering the price range the swap may reach
/// * `amount` - Specified amount (input or output)
/// * `sqrt_price_limit` - Price the swap may not pass (0 for no limit)
/// * `a_to_b` - Direction (true = token A in, price moves down)
/// * `specified_input` - Whether `amount` is the input amount
///
/// # Returns
/// The pool-side amounts and end state. Running out of supplied tick data
/// before the amount or the limit is reached is an error.
pub fn compute_swap(
    env: &Env,
    pool: &PoolSnapshot,
    sequence: &TickSequence,
    amount: u128,
    sqrt_price_limit: u128,
    a_to_b: bool,
    specified_input: bool,
) -> Result<SwapComputation, QuoteError> {
    pool.validate()?;
    let sqrt_price_limit = resolve_sqrt_price_limit(pool.sqrt_price, sqrt_price_limit, a_to_b)?;

    if amount == 0 {
        return Err(QuoteError::ZeroTradableAmount);
    }

    log!(env, "swap start", amount, a_to_b, specified_input, pool.tick_current_index);

    let mut amount_remaining = amount;
    let mut amount_calculated: u128 = 0;
    let mut current_sqrt_price = pool.sqrt_price;
    let mut current_tick_index = pool.tick_current_index;
    let mut current_liquidity = pool.liquidity;
    let mut trade_fee: u128 = 0;

    let mut boundaries = sequence.boundaries(current_tick_index, a_to_b)?;

    while amount_remaining > 0 && current_sqrt_price != sqrt_price_limit {
        let boundary = boundaries
            .next()
            .unwrap_or(Err(QuoteError::InsufficientTickArrayData))?;

        let next_tick_sqrt_price = tick_index_to_sqrt_price(boundary.tick_index)?;
        let target_sqrt_price = if a_to_b {
            next_tick_sqrt_price.max(sqrt_price_limit)
        } else {
            next_tick_sqrt_price.min(sqrt_price_limit)
        };

        let step = compute_swap_step(
            env,
            amount_remaining,
            pool.fee_rate_bps,
            current_liquidity,
            current_sqrt_price,
            target_sqrt_price,
            a_to_b,
            specified_input,
        )?;

        trade_fee = trade_fee
            .checked_add(step.fee_amount)
            .ok_or(QuoteError::ArithmeticOverflow)?;

        if specified_input {
            amount_remaining = amount_remaining
                .checked_sub(step.amount_in)
                .and_then(|rest| rest.checked_sub(step.fee_amount))
                .ok_or(QuoteError::ArithmeticOverflow)?;
            amount_calculated = amount_calculated
                .checked_add(step.amount_out)
                .ok_or(QuoteError::ArithmeticOverflow)?;
        } else {
            amount_remaining = amount_remaining
                .checked_sub(step.amount_out)
                .ok_or(QuoteError::ArithmeticOverflow)?;
            amount_calculated = amount_calculated
                .checked_add(step.amount_in)
                .and_then(|total| total.checked_add(step.fee_amount))
                .ok_or(QuoteError::ArithmeticOverflow)?;
        }

        if step.next_sqrt_price == next_tick_sqrt_price {
            if let Some(slot) = &boundary.slot {
                current_liquidity = cross_tick_liquidity(current_liquidity, slot.liquidity_net, a_to_b)?;
            }
            current_tick_index = tick_after_cross(boundary.tick_index, a_to_b);
        } else if step.next_sqrt_price != current_sqrt_price {
            current_tick_index = sqrt_price_to_tick_index(step.next_sqrt_price)?;
        }

        current_sqrt_price = step.next_sqrt_price;
    }

    let protocol_fee = mul_div(
        env,
        trade_fee,
        pool.protocol_fee_rate_bps as u128,
        BPS_DENOMINATOR as u128,
        Rounding::Down,
    )?;
    let lp_fee = trade_fee - protocol_fee;

    let swapped = amount - amount_remaining;
    let (amount_in, amount_out) = if specified_input {
        (swapped, amount_calculated)
    } else {
        (amount_calculated, swapped)
    };

    let outcome = if amount_remaining == 0 {
        SwapOutcome::Filled
    } else {
        SwapOutcome::PriceLimited
    };

    log!(env, "swap end", amount_in, amount_out, trade_fee, current_tick_index, amount_remaining);

    let tick_array_start_indexes =
        touched_tick_arrays(env, sequence, pool.tick_current_index, current_tick_index)?;

    Ok(SwapComputation {
        amount_in,
        amount_out,
        trade_fee,
        protocol_fee,
        lp_fee,
        sqrt_price_limit,
        end_sqrt_price: current_sqrt_price,
        end_tick_index: current_tick_index,
        end_liquidity: current_liquidity,
        outcome,
        tick_array_start_indexes,
    })
}

/// Start indexes of the supplied arrays between two ticks, in swap order
fn touched_tick_arrays(
    env: &Env,
    sequence: &TickSequence,
    from_tick: i32,
    to_tick: i32,
) -> Result<Vec<i32>, QuoteError> {
    let spacing = sequence.tick_spacing();
    let ticks_in_array = TICK_ARRAY_SIZE * spacing;
    let first = get_tick_array_start_tick_index(from_tick, spacing as u32)?;
    let last = get_tick_array_start_tick_index(to_tick, spacing as u32)?;
    let step = if last >= first { ticks_in_array } else { -ticks_in_array };

    let mut starts = Vec::new(env);
    let mut start = first;
    loop {
        if sequence.contains(start) {
            starts.push_back(start);
        }
        if start == last {
            break;
        }
        start += step;
    }
    Ok(starts)
}
