use soroban_sdk::{contracttype, Env, Vec};
use tidal_tick::{calculate_fee_growth_inside, calculate_seconds_per_liquidity_inside, Tick};

/// Pool state read before a simulation
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub current_tick_index: i32,
    pub tick_spacing: u32,
    pub liquidity: u128,
    pub sqrt_price: u128,
    pub fee: u128,
    pub fee_growth_global_x: u128,
    pub fee_growth_global_y: u128,
    pub seconds_per_liquidity_global: u128,
    pub last_timestamp: u64,
}

impl Default for PoolSnapshot {
    fn default() -> Self {
        Self {
            current_tick_index: 0,
            tick_spacing: 1,
            liquidity: 0,
            sqrt_price: 0,
            fee: 0,
            fee_growth_global_x: 0,
            fee_growth_global_y: 0,
            seconds_per_liquidity_global: 0,
            last_timestamp: 0,
        }
    }
}

impl PoolSnapshot {
    /// Fee growth inside a position range at the snapshot
    pub fn fee_growth_inside(&self, lower_tick: &Tick, upper_tick: &Tick) -> (u128, u128) {
        calculate_fee_growth_inside(
            lower_tick,
            upper_tick,
            self.current_tick_index,
            self.fee_growth_global_x,
            self.fee_growth_global_y,
        )
    }

    /// Seconds per liquidity inside a position range, as of `now`
    pub fn seconds_per_liquidity_inside(&self, lower_tick: &Tick, upper_tick: &Tick, now: u64) -> u128 {
        calculate_seconds_per_liquidity_inside(
            lower_tick,
            upper_tick,
            self.current_tick_index,
            self.liquidity,
            self.seconds_per_liquidity_global,
            self.last_timestamp,
            now,
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapParameters {
    pub x_to_y: bool,
    pub swap_amount: u64,
    pub by_amount_in: bool,
    /// Tolerance applied to `price_limit`, at 10^12
    pub slippage: u128,
    pub price_limit: u128,
    pub pool: PoolSnapshot,
}

/// How a simulation ended
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationStatus {
    Ok,
    WrongLimit,
    PriceLimitReached,
    TickNotFound,
    NoGainSwap,
    TooLargeGap,
    LimitReached,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationResult {
    pub status: SimulationStatus,
    /// Amount consumed per segment; a segment ends at each crossed tick
    ///
    /// A remainder kept at a tick it cannot cross is not part of any segment,
    /// so the sum can fall short of the amount consumed.
    pub amount_per_tick: Vec<u64>,
    pub accumulated_amount_in: u64,
    pub accumulated_amount_out: u64,
    pub accumulated_fee: u64,
    pub price_after_swap: u128,
    pub price_impact: u128,
    pub min_received: u64,
}

impl SimulationResult {
    /// Result of a simulation that never moved the price
    pub fn untouched(env: &Env, status: SimulationStatus, sqrt_price: u128) -> Self {
        Self {
            status,
            amount_per_tick: Vec::new(env),
            accumulated_amount_in: 0,
            accumulated_amount_out: 0,
            accumulated_fee: 0,
            price_after_swap: sqrt_price,
            price_impact: 0,
            min_received: 0,
        }
    }
}
