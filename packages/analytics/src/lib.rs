// Tidal Analytics Package
//
// Pool and incentive yield figures derived from two tick snapshots.
// Yields are floating point, so this crate links std.

pub mod apy;
pub mod error;
pub mod range;
pub mod rewards;
pub mod types;
pub mod volume;

pub use types::{
    LiquidityRange, ParsedTick, PoolApy, PoolApyParams, Range, Reward, RewardParams, RewardsApy,
    RewardsApyParams, TickLiquidity,
};
pub use error::AnalyticsError;

pub use range::{
    calculate_token_x_in_range, get_range_based_on_fee_growth, get_ticks_from_swap_range,
    get_token_x_in_range, parse_fee_growth_and_liquidity_on_ticks, parse_liquidity_on_ticks,
};
pub use volume::get_volume;
pub use apy::{daily_factor_pool, daily_factor_rewards, pool_apy, rewards_apy};
pub use rewards::calculate_reward;
