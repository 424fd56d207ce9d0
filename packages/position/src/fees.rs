// Fee Claims
//
// Owed amounts are accumulated at 10^12 and only truncated to whole tokens
// when a claim is simulated.

use soroban_sdk::Env;
use tidal_math::{
    checked_mul, div_floor, to_u128, u256, MathError, MathResult, DENOMINATOR,
    LIQUIDITY_DENOMINATOR,
};
use tidal_tick::{calculate_fee_growth_inside, Tick};
use crate::types::Position;

/// Fees earned since the position's checkpoint, at 10^12
pub(crate) fn fees_since_checkpoint(
    env: &Env,
    liquidity: u128,
    fee_growth_inside: u128,
    checkpoint: u128,
) -> MathResult<u128> {
    let delta = fee_growth_inside.wrapping_sub(checkpoint);

    let scaled = checked_mul(env, &u256(env, liquidity), &u256(env, delta))?;
    let owed = div_floor(env, &scaled, &u256(env, DENOMINATOR * LIQUIDITY_DENOMINATOR))?;
    to_u128(&owed)
}

fn whole_tokens(tokens_owed: u128, owed: u128) -> MathResult<u64> {
    let total = tokens_owed.checked_add(owed).ok_or(MathError::Overflow)? / DENOMINATOR;
    u64::try_from(total).map_err(|_| MathError::Overflow)
}

/// Tokens a position could claim given the current fee growth inside its range
///
/// # Returns
/// (tokens_x, tokens_y) in whole token units
pub fn calculate_tokens_owed(
    env: &Env,
    position: &Position,
    fee_growth_inside_x: u128,
    fee_growth_inside_y: u128,
) -> MathResult<(u64, u64)> {
    let owed_x = fees_since_checkpoint(env, position.liquidity, fee_growth_inside_x, position.fee_growth_inside_x)?;
    let owed_y = fees_since_checkpoint(env, position.liquidity, fee_growth_inside_y, position.fee_growth_inside_y)?;

    Ok((
        whole_tokens(position.tokens_owed_x, owed_x)?,
        whole_tokens(position.tokens_owed_y, owed_y)?,
    ))
}

/// Tokens a position could claim from its boundary ticks and the pool globals
pub fn calculate_claim_amount(
    env: &Env,
    position: &Position,
    lower_tick: &Tick,
    upper_tick: &Tick,
    current_tick: i32,
    fee_growth_global_x: u128,
    fee_growth_global_y: u128,
) -> MathResult<(u64, u64)> {
    let (inside_x, inside_y) = calculate_fee_growth_inside(
        lower_tick,
        upper_tick,
        current_tick,
        fee_growth_global_x,
        fee_growth_global_y,
    );

    calculate_tokens_owed(env, position, inside_x, inside_y)
}
