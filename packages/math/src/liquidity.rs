// SPDX-License-Identifier: MIT
// Liquidity Calculations

use soroban_sdk::Env;
use crate::constants::{LIQUIDITY_DENOMINATOR, PRICE_DENOMINATOR};
use crate::decimal::{checked_mul, div_floor, mul_div_floor, to_u128, u256};
use crate::error::{MathError, MathResult};
use crate::sqrt_price::{calculate_price_sqrt, get_delta_x, get_delta_y};

/// Liquidity bought with one token, and the other token it also requires
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleTokenLiquidity {
    pub liquidity: u128,
    pub amount: u64,
}

// ============================================================
// LIQUIDITY -> AMOUNTS
// ============================================================

/// Token X held by `liquidity` over [lower, upper] at the current price
pub fn get_x(
    env: &Env,
    liquidity: u128,
    upper_sqrt_price: u128,
    current_sqrt_price: u128,
    lower_sqrt_price: u128,
) -> MathResult<u64> {
    if upper_sqrt_price == 0 || current_sqrt_price == 0 || lower_sqrt_price == 0 {
        return Err(MathError::ZeroPrice);
    }

    if current_sqrt_price >= upper_sqrt_price {
        Ok(0)
    } else if current_sqrt_price < lower_sqrt_price {
        get_delta_x(env, lower_sqrt_price, upper_sqrt_price, liquidity, false)
    } else {
        get_delta_x(env, current_sqrt_price, upper_sqrt_price, liquidity, false)
    }
}

/// Token Y held by `liquidity` over [lower, upper] at the current price
pub fn get_y(
    env: &Env,
    liquidity: u128,
    upper_sqrt_price: u128,
    current_sqrt_price: u128,
    lower_sqrt_price: u128,
) -> MathResult<u64> {
    if upper_sqrt_price == 0 || current_sqrt_price == 0 || lower_sqrt_price == 0 {
        return Err(MathError::ZeroPrice);
    }

    if current_sqrt_price <= lower_sqrt_price {
        Ok(0)
    } else if current_sqrt_price >= upper_sqrt_price {
        get_delta_y(env, lower_sqrt_price, upper_sqrt_price, liquidity, false)
    } else {
        get_delta_y(env, lower_sqrt_price, current_sqrt_price, liquidity, false)
    }
}

/// Token X of `liquidity` spread over the whole range
pub fn get_x_from_liquidity(
    env: &Env,
    liquidity: u128,
    upper_sqrt_price: u128,
    lower_sqrt_price: u128,
) -> MathResult<u64> {
    get_delta_x(env, lower_sqrt_price, upper_sqrt_price, liquidity, false)
}

// ============================================================
// AMOUNT -> LIQUIDITY
// ============================================================

/// Liquidity bought with `x` over the tick range
///
/// Below the range no Y is needed. Inside the range liquidity is truncated
/// to whole units before the matching Y is computed.
pub fn get_liquidity_by_x(
    env: &Env,
    x: u64,
    lower_tick: i32,
    upper_tick: i32,
    current_sqrt_price: u128,
    rounding_up: bool,
) -> MathResult<SingleTokenLiquidity> {
    let lower_sqrt_price = calculate_price_sqrt(lower_tick)?;
    let upper_sqrt_price = calculate_price_sqrt(upper_tick)?;

    if upper_sqrt_price < current_sqrt_price {
        return Err(MathError::LiquidityUndetermined);
    }

    let amount = u256(env, x as u128);

    if current_sqrt_price < lower_sqrt_price {
        let nominator = mul_div_floor(env, lower_sqrt_price, upper_sqrt_price, PRICE_DENOMINATOR)?;
        let denominator = upper_sqrt_price - lower_sqrt_price;

        let scaled = checked_mul(env, &amount, &u256(env, nominator))?;
        let scaled = checked_mul(env, &scaled, &u256(env, LIQUIDITY_DENOMINATOR))?;
        let liquidity = to_u128(&div_floor(env, &scaled, &u256(env, denominator))?)?;

        return Ok(SingleTokenLiquidity { liquidity, amount: 0 });
    }

    let nominator = mul_div_floor(env, current_sqrt_price, upper_sqrt_price, PRICE_DENOMINATOR)?;
    let denominator = upper_sqrt_price - current_sqrt_price;

    let scaled = checked_mul(env, &amount, &u256(env, nominator))?;
    let units = to_u128(&div_floor(env, &scaled, &u256(env, denominator))?)?;
    let liquidity = units
        .checked_mul(LIQUIDITY_DENOMINATOR)
        .ok_or(MathError::Overflow)?;

    let y = get_delta_y(env, lower_sqrt_price, current_sqrt_price, liquidity, rounding_up)?;
    Ok(SingleTokenLiquidity { liquidity, amount: y })
}

/// Liquidity bought with `y` over the tick range
///
/// Above the range no X is needed. Liquidity keeps its fractional part.
pub fn get_liquidity_by_y(
    env: &Env,
    y: u64,
    lower_tick: i32,
    upper_tick: i32,
    current_sqrt_price: u128,
    rounding_up: bool,
) -> MathResult<SingleTokenLiquidity> {
    let lower_sqrt_price = calculate_price_sqrt(lower_tick)?;
    let upper_sqrt_price = calculate_price_sqrt(upper_tick)?;

    if current_sqrt_price < lower_sqrt_price {
        return Err(MathError::LiquidityUndetermined);
    }

    let amount = u256(env, y as u128);

    if upper_sqrt_price <= current_sqrt_price {
        let denominator = upper_sqrt_price - lower_sqrt_price;

        let scaled = checked_mul(env, &amount, &u256(env, PRICE_DENOMINATOR))?;
        let scaled = checked_mul(env, &scaled, &u256(env, LIQUIDITY_DENOMINATOR))?;
        let liquidity = to_u128(&div_floor(env, &scaled, &u256(env, denominator))?)?;

        return Ok(SingleTokenLiquidity { liquidity, amount: 0 });
    }

    let denominator = current_sqrt_price - lower_sqrt_price;

    let scaled = checked_mul(env, &amount, &u256(env, PRICE_DENOMINATOR))?;
    let scaled = checked_mul(env, &scaled, &u256(env, LIQUIDITY_DENOMINATOR))?;
    let liquidity = to_u128(&div_floor(env, &scaled, &u256(env, denominator))?)?;

    let x = get_delta_x(env, current_sqrt_price, upper_sqrt_price, liquidity, rounding_up)?;
    Ok(SingleTokenLiquidity { liquidity, amount: x })
}
