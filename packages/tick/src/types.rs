// Tick Types

use soroban_sdk::contracttype;

/// Snapshot of an initialized tick, as returned by the pool
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Tick index; the identity of the tick
    pub index: i32,
    /// true when crossing upward adds `liquidity_change`
    pub sign: bool,
    /// Magnitude of the liquidity change on crossing
    pub liquidity_change: u128,
    /// Total liquidity referencing this tick; zero means absent
    pub liquidity_gross: u128,
    /// Sqrt price at this tick
    pub sqrt_price: u128,
    /// Fee growth on the other side of this tick for token X
    pub fee_growth_outside_x: u128,
    /// Fee growth on the other side of this tick for token Y
    pub fee_growth_outside_y: u128,
    /// Seconds per liquidity on the other side of this tick
    pub seconds_per_liquidity_outside: u128,
}

impl Default for Tick {
    fn default() -> Self {
        Self {
            index: 0,
            sign: true,
            liquidity_change: 0,
            liquidity_gross: 0,
            sqrt_price: 0,
            fee_growth_outside_x: 0,
            fee_growth_outside_y: 0,
            seconds_per_liquidity_outside: 0,
        }
    }
}

impl Tick {
    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross > 0
    }

    /// Signed liquidity change applied when the price crosses this tick
    /// while `current_tick` is the active tick
    pub fn liquidity_delta(&self, current_tick: i32) -> (u128, bool) {
        let add = (current_tick >= self.index) != self.sign;
        (self.liquidity_change, add)
    }
}
