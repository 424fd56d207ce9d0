// SPDX-License-Identifier: MIT
// Sqrt Price Calculations

use soroban_sdk::Env;
use crate::constants::{
    DENOMINATOR, LIQUIDITY_TO_PRICE, MAX_TICK, PRICE_DENOMINATOR, PRICE_LIQUIDITY_DENOMINATOR,
};
use crate::decimal::{
    checked_add, checked_mul, div_ceil, div_floor, div_up, mul_div_ceil, mul_div_floor, sqrt_u128,
    to_token, to_u128, u256,
};
use crate::error::{MathError, MathResult};

// ============================================================
// TICK -> PRICE
// ============================================================

/// Convert tick to sqrt price at 10^24
/// Formula: sqrt(1.0001^tick)
pub fn calculate_price_sqrt(tick: i32) -> MathResult<u128> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK as u32 {
        return Err(MathError::TickOutOfRange);
    }

    // sqrt(1.0001^(2^n)) at 10^12, floored after every step
    let mut price: u128 = DENOMINATOR;
    if abs_tick & 0x1 != 0 { price = price * 1_000_049_998_750 / DENOMINATOR; }
    if abs_tick & 0x2 != 0 { price = price * 1_000_100_000_000 / DENOMINATOR; }
    if abs_tick & 0x4 != 0 { price = price * 1_000_200_010_000 / DENOMINATOR; }
    if abs_tick & 0x8 != 0 { price = price * 1_000_400_060_004 / DENOMINATOR; }
    if abs_tick & 0x10 != 0 { price = price * 1_000_800_280_056 / DENOMINATOR; }
    if abs_tick & 0x20 != 0 { price = price * 1_001_601_200_560 / DENOMINATOR; }
    if abs_tick & 0x40 != 0 { price = price * 1_003_204_964_963 / DENOMINATOR; }
    if abs_tick & 0x80 != 0 { price = price * 1_006_420_201_726 / DENOMINATOR; }
    if abs_tick & 0x100 != 0 { price = price * 1_012_881_622_442 / DENOMINATOR; }
    if abs_tick & 0x200 != 0 { price = price * 1_025_929_181_080 / DENOMINATOR; }
    if abs_tick & 0x400 != 0 { price = price * 1_052_530_684_591 / DENOMINATOR; }
    if abs_tick & 0x800 != 0 { price = price * 1_107_820_842_005 / DENOMINATOR; }
    if abs_tick & 0x1000 != 0 { price = price * 1_227_267_017_980 / DENOMINATOR; }
    if abs_tick & 0x2000 != 0 { price = price * 1_506_184_333_421 / DENOMINATOR; }
    if abs_tick & 0x4000 != 0 { price = price * 2_268_591_246_242 / DENOMINATOR; }
    if abs_tick & 0x8000 != 0 { price = price * 5_146_506_242_525 / DENOMINATOR; }
    if abs_tick & 0x10000 != 0 { price = price * 26_486_526_504_348 / DENOMINATOR; }
    if abs_tick & 0x20000 != 0 { price = price * 701_536_086_265_529 / DENOMINATOR; }

    if tick < 0 {
        price = DENOMINATOR * DENOMINATOR / price;
    }

    Ok(price * DENOMINATOR)
}

// ============================================================
// TOKEN DELTAS
// ============================================================

/// Amount of X between two prices
/// Formula: |a - b| * L * 10^18 / (a * b)
pub fn get_delta_x(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    rounding_up: bool,
) -> MathResult<u64> {
    if sqrt_price_a == 0 || sqrt_price_b == 0 {
        return Err(MathError::ZeroPrice);
    }
    let delta_price = sqrt_price_a.abs_diff(sqrt_price_b);

    let nominator = checked_mul(env, &u256(env, delta_price), &u256(env, liquidity))?;
    let nominator = checked_mul(env, &nominator, &u256(env, LIQUIDITY_TO_PRICE))?;
    let denominator = u256(env, sqrt_price_a).mul(&u256(env, sqrt_price_b));

    let result = if rounding_up {
        div_ceil(env, &nominator, &denominator)?
    } else {
        div_floor(env, &nominator, &denominator)?
    };
    to_token(&result)
}

/// Amount of Y between two prices
/// Formula: |a - b| * L / 10^30
pub fn get_delta_y(
    env: &Env,
    sqrt_price_a: u128,
    sqrt_price_b: u128,
    liquidity: u128,
    rounding_up: bool,
) -> MathResult<u64> {
    let delta_price = sqrt_price_a.abs_diff(sqrt_price_b);

    let nominator = checked_mul(env, &u256(env, delta_price), &u256(env, liquidity))?;
    let denominator = u256(env, PRICE_LIQUIDITY_DENOMINATOR);

    let result = if rounding_up {
        div_ceil(env, &nominator, &denominator)?
    } else {
        div_floor(env, &nominator, &denominator)?
    };
    to_token(&result)
}

// ============================================================
// NEXT PRICE
// ============================================================

/// Price after adding or removing X, rounded up
/// Formula: p * L' / (L' +- p * x), L' = L * 10^18
pub fn get_next_sqrt_price_x_up(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    x: u64,
    add_x: bool,
) -> MathResult<u128> {
    if x == 0 {
        return Ok(sqrt_price);
    }

    let price = u256(env, sqrt_price);
    let big_liquidity = u256(env, liquidity).mul(&u256(env, LIQUIDITY_TO_PRICE));
    let price_x = price.mul(&u256(env, x as u128));

    let denominator = if add_x {
        checked_add(env, &big_liquidity, &price_x)?
    } else {
        // the curve has no price for removing all of X
        if price_x >= big_liquidity {
            return Err(MathError::Overflow);
        }
        big_liquidity.sub(&price_x)
    };

    let nominator = checked_mul(env, &price, &big_liquidity)?;
    to_u128(&div_ceil(env, &nominator, &denominator)?)
}

/// Price after adding or removing Y, rounded down
/// Formula: p +- y * 10^30 / L
pub fn get_next_sqrt_price_y_down(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    y: u64,
    add_y: bool,
) -> MathResult<u128> {
    if liquidity == 0 {
        return Err(MathError::ZeroLiquidity);
    }
    let nominator = u256(env, y as u128).mul(&u256(env, PRICE_LIQUIDITY_DENOMINATOR));
    let denominator = u256(env, liquidity);

    if add_y {
        let quotient = to_u128(&div_floor(env, &nominator, &denominator)?)?;
        sqrt_price.checked_add(quotient).ok_or(MathError::Overflow)
    } else {
        let quotient = to_u128(&div_ceil(env, &nominator, &denominator)?)?;
        sqrt_price.checked_sub(quotient).ok_or(MathError::Overflow)
    }
}

/// Price after the pool receives `amount` of the input token
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u64,
    x_to_y: bool,
) -> MathResult<u128> {
    if x_to_y {
        get_next_sqrt_price_x_up(env, sqrt_price, liquidity, amount, true)
    } else {
        get_next_sqrt_price_y_down(env, sqrt_price, liquidity, amount, true)
    }
}

/// Price after the pool pays out `amount` of the output token
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price: u128,
    liquidity: u128,
    amount: u64,
    x_to_y: bool,
) -> MathResult<u128> {
    if x_to_y {
        get_next_sqrt_price_y_down(env, sqrt_price, liquidity, amount, false)
    } else {
        get_next_sqrt_price_x_up(env, sqrt_price, liquidity, amount, false)
    }
}

// ============================================================
// SLIPPAGE & IMPACT
// ============================================================

/// Move a sqrt price by a slippage rate applied to the underlying price
/// Formula: price * sqrt((10^12 +- slippage) * 10^12) / 10^12
pub fn calculate_price_after_slippage(
    env: &Env,
    sqrt_price: u128,
    slippage: u128,
    up: bool,
) -> MathResult<u128> {
    let multiplier = if up {
        DENOMINATOR.checked_add(slippage).ok_or(MathError::InvalidSlippage)?
    } else {
        DENOMINATOR.checked_sub(slippage).ok_or(MathError::InvalidSlippage)?
    };
    let scaled = multiplier
        .checked_mul(DENOMINATOR)
        .ok_or(MathError::InvalidSlippage)?;

    mul_div_floor(env, sqrt_price, sqrt_u128(scaled), DENOMINATOR)
}

/// Relative move of the underlying price, as a percentage
/// Formula: 10^12 - min^2 * 10^12 / max^2
pub fn calculate_price_impact(
    env: &Env,
    starting_sqrt_price: u128,
    ending_sqrt_price: u128,
) -> MathResult<u128> {
    let start = u256(env, starting_sqrt_price);
    let end = u256(env, ending_sqrt_price);
    let start_sq = start.mul(&start);
    let end_sq = end.mul(&end);

    let (lower, higher) = if end_sq >= start_sq {
        (start_sq, end_sq)
    } else {
        (end_sq, start_sq)
    };

    let nominator = lower.mul(&u256(env, DENOMINATOR));
    let ratio = to_u128(&div_floor(env, &nominator, &higher).map_err(|_| MathError::ZeroPrice)?)?;
    Ok(DENOMINATOR - ratio)
}

/// Tokens received for `amount_in` when the whole trade executes at
/// `target_sqrt_price`, net of the pool fee
pub fn calculate_min_received_tokens_by_amount_in(
    env: &Env,
    target_sqrt_price: u128,
    x_to_y: bool,
    amount_in: u64,
    fee: u128,
) -> MathResult<u64> {
    let price = u256(env, target_sqrt_price);
    let price_sq = price.mul(&price);
    let price_denominator_sq = u256(env, PRICE_DENOMINATOR).mul(&u256(env, PRICE_DENOMINATOR));
    let amount = u256(env, amount_in as u128);

    let amount_out = if x_to_y {
        let nominator = checked_mul(env, &amount, &price_sq)?;
        div_floor(env, &nominator, &price_denominator_sq)?
    } else {
        let nominator = checked_mul(env, &amount, &price_denominator_sq)?;
        div_floor(env, &nominator, &price_sq).map_err(|_| MathError::ZeroPrice)?
    };
    let amount_out = to_u128(&amount_out)?;

    let fee_amount = mul_div_ceil(env, amount_out, fee, DENOMINATOR)?;
    let received = amount_out.saturating_sub(fee_amount);
    u64::try_from(received).map_err(|_| MathError::Overflow)
}

/// Fee charged on an amount, rounded up
#[inline]
pub fn fee_of(amount: u64, fee: u128) -> MathResult<u64> {
    let gross = (amount as u128).checked_mul(fee).ok_or(MathError::Overflow)?;
    let fee_amount = div_up(gross, DENOMINATOR)?;
    u64::try_from(fee_amount).map_err(|_| MathError::Overflow)
}
