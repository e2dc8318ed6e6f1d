// Tidepool Transfer Fee Package

#![no_std]

pub mod types;
pub mod adjust;

pub use types::{
    TransferFee, TransferFeeConfig, TransferFeeExcludedAmount, TransferFeeIncludedAmount,
};
pub use adjust::{calculate_fee, exclude_fee, include_fee, validate_transfer_fee_config};
