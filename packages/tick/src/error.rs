// Tickmap Errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TickmapError {
    /// Flip would leave the bit unchanged
    TickAlreadyInState = 400,
    /// Grid index falls outside the tickmap
    TickOutsideTickmap = 401,
    /// Tick is not a multiple of the spacing
    TickNotAligned = 402,
    /// Snapshot is longer than the tickmap
    InvalidTickmapSize = 403,
}
