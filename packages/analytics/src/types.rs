use soroban_sdk::contracttype;
use tidal_tick::Tick;

/// Active liquidity right above a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickLiquidity {
    pub index: i32,
    pub liquidity: i128,
}

/// Tick reduced to what range detection needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedTick {
    pub index: i32,
    /// Cumulative liquidity from the lowest tick up to this one
    pub liquidity: i128,
    pub fee_growth_outside_x: u128,
    pub fee_growth_outside_y: u128,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquidityRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Token X locked in the range that earned fees between two snapshots
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range {
    pub token_x_amount: u128,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PoolApyParams {
    /// Pool fee rate, at 10^12
    pub fee: u128,
    pub current_tick_index: i32,
    pub ticks_previous_snapshot: Vec<Tick>,
    pub ticks_current_snapshot: Vec<Tick>,
    /// Averaged in with a weight of six days when present
    pub weekly_factor: Option<f64>,
    pub volume_x: u64,
    pub volume_y: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolApy {
    /// Annual yield in percent
    pub apy: f64,
    pub apy_factor: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RewardsApyParams {
    pub ticks_previous_snapshot: Vec<Tick>,
    pub ticks_current_snapshot: Vec<Tick>,
    pub current_tick_index: i32,
    pub weekly_factor: Option<f64>,
    pub reward_in_usd: f64,
    pub token_x_price: f64,
    pub token_decimal: u32,
    /// Incentive length in days
    pub duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardsApy {
    /// Annual yield in percent
    pub reward: f64,
    pub reward_factor: f64,
}

/// Staked position and incentive state needed to price a reward claim
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardParams {
    pub total_reward_unclaimed: u128,
    pub total_seconds_claimed: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub liquidity: u128,
    pub seconds_per_liquidity_initial: u128,
    pub seconds_per_liquidity_inside: u128,
    pub current_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reward {
    /// Liquidity-weighted seconds the position spent in range
    pub seconds_inside: u128,
    pub result: u128,
}
