use soroban_sdk::contracterror;
use tidal_math::MathError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    // Terminal statuses (500-509)
    WrongLimit = 500,
    PriceLimitReached = 501,
    TickNotFound = 502,
    NoGainSwap = 503,
    TooLargeGap = 504,
    LimitReached = 505,

    // Arithmetic (510+)
    MathFailure = 510,
}

impl From<MathError> for SwapError {
    fn from(_: MathError) -> Self {
        SwapError::MathFailure
    }
}
