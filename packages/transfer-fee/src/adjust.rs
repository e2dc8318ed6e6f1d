// Transfer Fee Inclusion and Exclusion

use tidepool_math::{QuoteError, BPS_DENOMINATOR, MAX_TRANSFER_FEE_BPS, UNCAPPED_MAX_FEE};
use crate::types::{TransferFee, TransferFeeConfig, TransferFeeExcludedAmount, TransferFeeIncludedAmount};

const BPS: u128 = BPS_DENOMINATOR as u128;

/// ceil(amount * numerator / denominator) without a wide intermediate
///
/// Splits `amount` into quotient and remainder by `denominator` so only
/// products below `denominator * numerator` are formed.
fn mul_div_ceil(amount: u128, numerator: u128, denominator: u128) -> Option<u128> {
    let whole = (amount / denominator).checked_mul(numerator)?;
    let rest = amount % denominator * numerator;
    whole.checked_add(rest.div_ceil(denominator))
}

/// Reject a fee above 100% or a schedule whose epochs run backwards
pub fn validate_transfer_fee_config(config: &TransferFeeConfig) -> Result<(), QuoteError> {
    let older = &config.older_transfer_fee;
    let newer = &config.newer_transfer_fee;

    if older.fee_bps > MAX_TRANSFER_FEE_BPS
        || newer.fee_bps > MAX_TRANSFER_FEE_BPS
        || newer.epoch < older.epoch
    {
        return Err(QuoteError::InvalidTransferFeeConfig);
    }
    Ok(())
}

/// Fee charged on a transfer of `amount`: min(ceil(amount * bps / 10000), max_fee)
pub fn calculate_fee(fee: &TransferFee, amount: u128) -> u128 {
    if fee.fee_bps == 0 || amount == 0 {
        return 0;
    }
    // Never above `amount`, so it always fits.
    let raw_fee = mul_div_ceil(amount, fee.fee_bps as u128, BPS).unwrap_or(amount);
    raw_fee.min(fee.max_fee)
}

/// Net amount delivered when `amount` is sent
///
/// `None` means the token charges no transfer fee.
pub fn exclude_fee(
    config: Option<&TransferFeeConfig>,
    epoch: u64,
    amount: u128,
) -> Result<TransferFeeExcludedAmount, QuoteError> {
    let Some(config) = config else {
        return Ok(TransferFeeExcludedAmount { amount, fee: 0 });
    };
    validate_transfer_fee_config(config)?;

    let fee = calculate_fee(config.fee_in_force(epoch), amount);
    Ok(TransferFeeExcludedAmount { amount: amount - fee, fee })
}

/// Gross amount to send so that `amount` is delivered
///
/// Inverse of `exclude_fee`: excluding the fee from the returned amount gives
/// back `amount`. A 100% fee without a cap has no inverse.
pub fn include_fee(
    config: Option<&TransferFeeConfig>,
    epoch: u64,
    amount: u128,
) -> Result<TransferFeeIncludedAmount, QuoteError> {
    let Some(config) = config else {
        return Ok(TransferFeeIncludedAmount { amount, fee: 0 });
    };
    validate_transfer_fee_config(config)?;

    let transfer_fee = config.fee_in_force(epoch);
    if amount == 0 || transfer_fee.fee_bps == 0 {
        return Ok(TransferFeeIncludedAmount { amount, fee: 0 });
    }

    let fee = if transfer_fee.fee_bps == MAX_TRANSFER_FEE_BPS {
        if transfer_fee.max_fee == UNCAPPED_MAX_FEE {
            return Err(QuoteError::TransferFeeCalculationError);
        }
        transfer_fee.max_fee
    } else {
        // gross = ceil(amount * 10000 / (10000 - bps)) = amount + ceil(amount * bps / (10000 - bps))
        let remaining_bps = BPS - transfer_fee.fee_bps as u128;
        match mul_div_ceil(amount, transfer_fee.fee_bps as u128, remaining_bps) {
            Some(raw_fee) if raw_fee < transfer_fee.max_fee => raw_fee,
            _ => transfer_fee.max_fee,
        }
    };

    let gross = amount.checked_add(fee).ok_or(QuoteError::ArithmeticOverflow)?;
    Ok(TransferFeeIncludedAmount { amount: gross, fee })
}
