// SPDX-License-Identifier: MIT
// Fixed-point helpers
//
// Values are plain integers scaled by the denominators in `constants`.
// Products that can exceed 128 bits are formed in the host's U256.

use soroban_sdk::{Env, U256};
use crate::constants::{
    DENOMINATOR, FEE_OFFSET, FEE_TIER_INPUTS, FEE_TO_SPACING_OFFSET, PRICE_DENOMINATOR,
};
use crate::error::{MathError, MathResult};

// ============================================================
// U256 PRIMITIVES
// ============================================================

#[inline]
pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

#[inline]
fn u256_zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

#[inline]
fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// a * b, or Overflow instead of trapping the host
pub fn checked_mul(env: &Env, a: &U256, b: &U256) -> MathResult<U256> {
    let zero = u256_zero(env);
    if *a == zero || *b == zero {
        return Ok(zero);
    }
    if *b > u256_max(env).div(a) {
        return Err(MathError::Overflow);
    }
    Ok(a.mul(b))
}

/// a + b, or Overflow instead of trapping the host
pub fn checked_add(env: &Env, a: &U256, b: &U256) -> MathResult<U256> {
    if *b > u256_max(env).sub(a) {
        return Err(MathError::Overflow);
    }
    Ok(a.add(b))
}

/// Floor division
pub fn div_floor(env: &Env, numerator: &U256, denominator: &U256) -> MathResult<U256> {
    if *denominator == u256_zero(env) {
        return Err(MathError::DivisionByZero);
    }
    Ok(numerator.div(denominator))
}

/// Ceiling division
pub fn div_ceil(env: &Env, numerator: &U256, denominator: &U256) -> MathResult<U256> {
    let zero = u256_zero(env);
    if *denominator == zero {
        return Err(MathError::DivisionByZero);
    }
    let quotient = numerator.div(denominator);
    if numerator.rem_euclid(denominator) != zero {
        Ok(quotient.add(&U256::from_u32(env, 1)))
    } else {
        Ok(quotient)
    }
}

#[inline]
pub fn to_u128(value: &U256) -> MathResult<u128> {
    value.to_u128().ok_or(MathError::Overflow)
}

/// Narrow to a token amount
#[inline]
pub fn to_token(value: &U256) -> MathResult<u64> {
    u64::try_from(to_u128(value)?).map_err(|_| MathError::Overflow)
}

// ============================================================
// MUL-DIV
// ============================================================

/// (a * b) / denominator, rounded down
pub fn mul_div_floor(env: &Env, a: u128, b: u128, denominator: u128) -> MathResult<u128> {
    let product = u256(env, a).mul(&u256(env, b));
    to_u128(&div_floor(env, &product, &u256(env, denominator))?)
}

/// (a * b) / denominator, rounded up
pub fn mul_div_ceil(env: &Env, a: u128, b: u128, denominator: u128) -> MathResult<u128> {
    let product = u256(env, a).mul(&u256(env, b));
    to_u128(&div_ceil(env, &product, &u256(env, denominator))?)
}

/// Ceiling division of two u128
#[inline]
pub fn div_up(numerator: u128, denominator: u128) -> MathResult<u128> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        Ok(result + 1)
    } else {
        Ok(result)
    }
}

// ============================================================
// SQUARE ROOTS
// ============================================================

/// Integer square root, rounded down (Newton iteration)
pub fn sqrt_u128(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    let mut result = value;
    let mut next = value / 2 + value % 2;
    while next < result {
        result = next;
        next = (value / next + next) / 2;
    }
    result
}

/// Integer square root of a U256, rounded down
pub fn sqrt_u256(env: &Env, value: &U256) -> U256 {
    let two = U256::from_u32(env, 2);
    if *value < two {
        return value.clone();
    }
    let mut result = value.clone();
    let mut next = value.shr(1).add(&value.rem_euclid(&two));
    while next < result {
        result = next.clone();
        next = value.div(&next).add(&next).shr(1);
    }
    result
}

// ============================================================
// CONSTRUCTORS
// ============================================================

/// `x / 10^decimals` as a percentage
pub fn to_percent(x: u128, decimals: u32) -> MathResult<u128> {
    scale(DENOMINATOR, x, decimals)
}

/// Same scale as a percentage; used for plain 12-decimal figures
pub fn to_decimal(x: u128, decimals: u32) -> MathResult<u128> {
    to_percent(x, decimals)
}

/// `x / 10^decimals` as a sqrt price
pub fn to_price(x: u128, decimals: u32) -> MathResult<u128> {
    scale(PRICE_DENOMINATOR, x, decimals)
}

fn scale(denominator: u128, x: u128, decimals: u32) -> MathResult<u128> {
    let divisor = 10u128.checked_pow(decimals).ok_or(MathError::Overflow)?;
    let scaled = denominator.checked_mul(x).ok_or(MathError::Overflow)?;
    Ok(scaled / divisor)
}

// ============================================================
// FEE TIERS
// ============================================================

/// Fee input (1 = 0.001%) to a percentage
pub fn from_fee(fee: u128) -> MathResult<u128> {
    fee.checked_mul(FEE_OFFSET).ok_or(MathError::Overflow)
}

/// Default tick spacing of a fee tier
pub fn fee_to_tick_spacing(fee: u128) -> MathResult<i32> {
    i32::try_from(fee / FEE_TO_SPACING_OFFSET).map_err(|_| MathError::InvalidTickSpacing)
}

/// Standard fee tiers as percentages
pub fn fee_tiers() -> [u128; 5] {
    FEE_TIER_INPUTS.map(|fee| fee * FEE_OFFSET)
}
