// Quote error codes.
//
// Every fallible function in the quote packages returns `Result<_, QuoteError>`.
// Codes are grouped by concern so a caller receiving the raw u32 from a
// contract boundary can still tell a math failure from a caller mistake.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum QuoteError {
    // Math errors (100-199)
    /// A fixed-point result does not fit in 128 bits
    ArithmeticOverflow = 100,
    /// Division with a zero denominator
    DivisionByZero = 101,
    /// A token amount delta does not fit in 128 bits
    AmountExceedsMax = 102,

    // Price and tick errors (200-299)
    /// Tick index outside [MIN_TICK_INDEX, MAX_TICK_INDEX]
    TickIndexOutOfBounds = 200,
    /// Sqrt price outside [MIN_SQRT_PRICE, MAX_SQRT_PRICE]
    SqrtPriceOutOfBounds = 201,
    /// Tick spacing must be positive
    InvalidTickSpacing = 202,
    /// Lower tick must be below upper tick and both aligned to the spacing
    InvalidPositionRange = 203,

    // Tick array errors (300-399)
    /// Traversal needs a tick array the caller did not supply
    InsufficientTickArrayData = 300,
    /// Supplied tick arrays are empty, misaligned, duplicated or not contiguous
    InvalidTickArraySequence = 301,

    // Swap errors (400-499)
    /// Nothing is left to trade once fees are taken
    ZeroTradableAmount = 400,
    /// Sqrt price limit lies on the wrong side of the current price
    InvalidSqrtPriceLimitDirection = 401,
    /// Slippage tolerance above 10000 bps
    InvalidSlippageTolerance = 402,
    /// Pool fee or protocol fee rate above its maximum
    InvalidFeeRate = 403,

    // Transfer fee errors (500-599)
    /// Fee-inclusive amount is undefined (100% uncapped fee)
    TransferFeeCalculationError = 500,
    /// Transfer fee above 100% or epochs out of order
    InvalidTransferFeeConfig = 501,

    // Reward errors (600-699)
    /// Quote timestamp is earlier than the pool's last reward update
    InvalidTimestamp = 600,
}
