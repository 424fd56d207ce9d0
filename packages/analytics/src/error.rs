use soroban_sdk::contracterror;
use tidal_math::MathError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AnalyticsError {
    // Snapshot errors (600-609)
    /// Both tick snapshots are empty
    TickArrayIsEmpty = 600,
    /// No active range could be located in the snapshots
    TickNotFound = 601,

    // Incentive errors
    /// The incentive starts after the given time
    IncentiveNotStarted = 602,
    /// Every second of the incentive has already been claimed
    ZeroSecondsUnclaimed = 603,

    // Arithmetic (610+)
    MathFailure = 610,
}

impl From<MathError> for AnalyticsError {
    fn from(_: MathError) -> Self {
        AnalyticsError::MathFailure
    }
}
