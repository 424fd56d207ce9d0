use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PositionError {
    /// The minimum range no longer fits between the current tick and the edge
    RangeLimitReached = 700,
}
