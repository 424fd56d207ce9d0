// Yield Figures
//
// Daily factors are the fraction of locked token X earned in one day.
// A snapshot pair that yields no usable range contributes a factor of zero.

use soroban_sdk::{log, Env};
use tidal_math::{calculate_price_sqrt, MathError, FEE_TIER_DENOMINATOR, PROTOCOL_FEE};
use crate::error::AnalyticsError;
use crate::range::calculate_token_x_in_range;
use crate::types::{PoolApy, PoolApyParams, RewardsApy, RewardsApyParams};
use crate::volume::get_volume;

/// Daily pool factor: `volume * fee% * (1 - PROTOCOL_FEE) / token_x`
pub fn daily_factor_pool(token_x_amount: u128, volume: f64, fee: u128) -> f64 {
    let fee = (fee as f64 / FEE_TIER_DENOMINATOR) * (1.0 - PROTOCOL_FEE);
    (volume * fee) / token_x_amount as f64
}

/// Daily rewards factor: `reward / (whole token_x * price * duration)`
pub fn daily_factor_rewards(
    reward_in_usd: f64,
    token_x_amount: u128,
    token_x_price: f64,
    token_decimal: u32,
    duration: f64,
) -> f64 {
    let whole_tokens = 10u128
        .checked_pow(token_decimal)
        .map_or(0, |unit| token_x_amount / unit);
    reward_in_usd / (whole_tokens as f64 * token_x_price * duration)
}

fn blend_weekly(daily: f64, weekly: Option<f64>) -> f64 {
    match weekly {
        Some(weekly) => (daily + weekly * 6.0) / 7.0,
        None => daily,
    }
}

fn pool_daily_factor(env: &Env, params: &PoolApyParams) -> Result<f64, AnalyticsError> {
    let range = calculate_token_x_in_range(
        env,
        &params.ticks_previous_snapshot,
        &params.ticks_current_snapshot,
        params.current_tick_index,
    )?;
    if range.token_x_amount == 0 {
        return Err(MathError::DivisionByZero.into());
    }

    let previous_sqrt_price = calculate_price_sqrt(range.tick_lower)?;
    let current_sqrt_price = calculate_price_sqrt(range.tick_upper)?;
    let volume = get_volume(env, params.volume_x, params.volume_y, previous_sqrt_price, current_sqrt_price)?;

    Ok(daily_factor_pool(range.token_x_amount, volume as f64, params.fee))
}

fn rewards_daily_factor(env: &Env, params: &RewardsApyParams) -> Result<f64, AnalyticsError> {
    let range = calculate_token_x_in_range(
        env,
        &params.ticks_previous_snapshot,
        &params.ticks_current_snapshot,
        params.current_tick_index,
    )?;

    let factor = daily_factor_rewards(
        params.reward_in_usd,
        range.token_x_amount,
        params.token_x_price,
        params.token_decimal,
        params.duration,
    );
    if !factor.is_finite() {
        return Err(MathError::DivisionByZero.into());
    }
    Ok(factor)
}

/// Annual pool yield compounded daily: `((1 + f)^365 - 1) * 100`
pub fn pool_apy(env: &Env, params: &PoolApyParams) -> PoolApy {
    let daily_factor = pool_daily_factor(env, params).unwrap_or_else(|error| {
        log!(env, "pool apy: daily factor set to zero", error as u32);
        0.0
    });

    let apy_factor = blend_weekly(daily_factor, params.weekly_factor);
    let apy = ((apy_factor + 1.0).powf(365.0) - 1.0) * 100.0;

    PoolApy { apy, apy_factor }
}

/// Annual incentive yield: `((duration * f + 1)^(365 / duration) - 1) * 100`
pub fn rewards_apy(env: &Env, params: &RewardsApyParams) -> RewardsApy {
    let daily_factor = rewards_daily_factor(env, params).unwrap_or_else(|error| {
        log!(env, "rewards apy: daily factor set to zero", error as u32);
        0.0
    });

    let reward_factor = blend_weekly(daily_factor, params.weekly_factor);
    let reward = ((params.duration * reward_factor + 1.0).powf(365.0 / params.duration) - 1.0) * 100.0;

    RewardsApy { reward, reward_factor }
}
