// Protocol constants shared by every quote package.
//
// Grouped by concern. Values mirror the on-chain program; changing any of
// them makes quotes diverge from what the program will execute.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Minimum valid tick index
/// Price at MIN_TICK_INDEX ≈ 5.4e-20
pub const MIN_TICK_INDEX: i32 = -443636;

/// Maximum valid tick index
/// Price at MAX_TICK_INDEX ≈ 1.8e+19
pub const MAX_TICK_INDEX: i32 = 443636;

/// Number of tick slots held by one tick array
pub const TICK_ARRAY_SIZE: i32 = 88;

/// Largest tick spacing a pool may use
pub const MAX_TICK_SPACING: u32 = 32768;

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Sqrt price at MIN_TICK_INDEX, as produced by `tick_index_to_sqrt_price`
pub const MIN_SQRT_PRICE: u128 = 4295048016;

/// Sqrt price at MAX_TICK_INDEX, as produced by `tick_index_to_sqrt_price`
pub const MAX_SQRT_PRICE: u128 = 79226673521066979257578248091;

/// Sqrt price for 1:1 price ratio (2^64)
pub const SQRT_PRICE_1_1: u128 = 18446744073709551616_u128;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Denominator for every basis-point rate (100% = 10000 bps)
pub const BPS_DENOMINATOR: u32 = 10000;

/// Maximum swap fee rate a pool may carry (6%)
pub const MAX_FEE_RATE_BPS: u32 = 600;

/// Maximum share of the swap fee taken by the protocol (25%)
pub const MAX_PROTOCOL_FEE_RATE_BPS: u32 = 2500;

/// Maximum transfer fee a mint may carry (100%)
pub const MAX_TRANSFER_FEE_BPS: u32 = 10000;

/// A transfer fee cap of this value means the fee is uncapped
pub const UNCAPPED_MAX_FEE: u128 = u128::MAX;

/// Maximum slippage tolerance accepted by the quote functions (100%)
pub const MAX_SLIPPAGE_TOLERANCE_BPS: u32 = 10000;

// ============================================================
// REWARD CONSTANTS
// ============================================================

/// Number of reward slots carried by a pool and by each position
pub const NUM_REWARDS: u32 = 3;

// ============================================================
// MATH CONSTANTS
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
pub const Q64: u128 = 1u128 << 64;

/// Mask selecting the fractional half of a Q64.64 value
pub const Q64_MASK: u128 = 0xFFFF_FFFF_FFFF_FFFF;
