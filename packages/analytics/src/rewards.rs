// Incentive Rewards

use soroban_sdk::Env;
use tidal_math::{checked_mul, div_floor, to_u128, u256, DENOMINATOR, LIQUIDITY_DENOMINATOR};
use crate::error::AnalyticsError;
use crate::types::{Reward, RewardParams};

/// Share of the unclaimed incentive earned by a staked position
///
/// Seconds inside are `(spl - spl_initial) * L / 10^6 / 10^12`; the share is
/// that against every second not yet claimed, counted to `max(end, now)`.
pub fn calculate_reward(env: &Env, params: &RewardParams) -> Result<Reward, AnalyticsError> {
    if params.current_time <= params.start_time {
        return Err(AnalyticsError::IncentiveNotStarted);
    }

    let seconds_per_liquidity = params
        .seconds_per_liquidity_inside
        .wrapping_sub(params.seconds_per_liquidity_initial);
    let weighted = checked_mul(env, &u256(env, seconds_per_liquidity), &u256(env, params.liquidity))?;
    let seconds_inside = to_u128(&div_floor(env, &weighted, &u256(env, LIQUIDITY_DENOMINATOR * DENOMINATOR))?)?;

    let total_seconds_unclaimed = params
        .end_time
        .max(params.current_time)
        .checked_sub(params.start_time)
        .and_then(|elapsed| elapsed.checked_sub(params.total_seconds_claimed))
        .filter(|seconds| *seconds > 0)
        .ok_or(AnalyticsError::ZeroSecondsUnclaimed)?;

    let share = checked_mul(env, &u256(env, params.total_reward_unclaimed), &u256(env, seconds_inside))?;
    let result = to_u128(&div_floor(env, &share, &u256(env, total_seconds_unclaimed as u128))?)?;

    Ok(Reward { seconds_inside, result })
}
