// Error types for the math core
//
// Grouped by code range so the numbers stay stable when a pool contract
// forwards them to callers.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MathError {
    // Arithmetic errors (100-199)
    /// Division by a zero denominator
    DivisionByZero = 100,
    /// Result does not fit the target integer width
    Overflow = 101,
    /// A sqrt price of zero was supplied
    ZeroPrice = 102,
    /// An operation needs non-zero liquidity
    ZeroLiquidity = 103,

    // Range errors (200-299)
    /// Tick beyond ±MAX_TICK or outside the tickmap
    TickOutOfRange = 200,
    /// Tick is not a multiple of the tick spacing
    TickNotAligned = 201,
    /// Lower tick must be strictly below upper tick
    InvalidTickRange = 202,
    /// Tick spacing must be positive
    InvalidTickSpacing = 203,
    /// Bad start/stop/step combination for a tick array
    InvalidTickArrayParameters = 204,

    // Pricing errors (300-399)
    /// Slippage pushes the price below zero
    InvalidSlippage = 300,
    /// Current price lies on the wrong side of the range for this token
    LiquidityUndetermined = 301,
}

pub type MathResult<T> = Result<T, MathError>;
