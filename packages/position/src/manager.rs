// Position Management Logic

use soroban_sdk::Env;
use tidal_math::{check_ticks, get_liquidity_by_x, get_liquidity_by_y, MathError, MathResult};
use crate::concentration::calculate_tick_delta;
use crate::fees::fees_since_checkpoint;
use crate::types::{Position, PositionInitData};

/// Check that a position's boundaries are ordered, aligned and in range
pub fn validate_position(position: &Position, tick_spacing: i32) -> MathResult<()> {
    check_ticks(position.lower_tick_index, position.upper_tick_index, tick_spacing)
}

/// Move a position's fee checkpoint to the current fee growth inside
///
/// Fees earned since the previous checkpoint are added to `tokens_owed_*`
/// at 10^12. Checkpoints move even when the position holds no liquidity.
pub fn update_position(
    env: &Env,
    position: &mut Position,
    fee_growth_inside_x: u128,
    fee_growth_inside_y: u128,
) -> MathResult<()> {
    if position.liquidity > 0 {
        let owed_x = fees_since_checkpoint(env, position.liquidity, fee_growth_inside_x, position.fee_growth_inside_x)?;
        let owed_y = fees_since_checkpoint(env, position.liquidity, fee_growth_inside_y, position.fee_growth_inside_y)?;

        position.tokens_owed_x = position.tokens_owed_x.checked_add(owed_x).ok_or(MathError::Overflow)?;
        position.tokens_owed_y = position.tokens_owed_y.checked_add(owed_y).ok_or(MathError::Overflow)?;
    }

    position.fee_growth_inside_x = fee_growth_inside_x;
    position.fee_growth_inside_y = fee_growth_inside_y;
    Ok(())
}

/// Symmetric range around the current tick for a target concentration,
/// with the liquidity bought by a single-token deposit
///
/// # Arguments
/// * `amount` - Deposit of the token selected by `by_amount_x`
/// * `tick_spacing` - Pool tick spacing
/// * `concentration` - Target concentration, see `calculate_concentration`
/// * `minimum_range` - Narrowest range in grid steps
/// * `current_tick` - Current tick of the pool
/// * `current_sqrt_price` - Current sqrt price of the pool
/// * `rounding_up` - Round the counterpart token amount up
/// * `by_amount_x` - `amount` is token X when true, token Y otherwise
#[allow(clippy::too_many_arguments)]
pub fn get_position_init_data(
    env: &Env,
    amount: u64,
    tick_spacing: i32,
    concentration: f64,
    minimum_range: i32,
    current_tick: i32,
    current_sqrt_price: u128,
    rounding_up: bool,
    by_amount_x: bool,
) -> MathResult<PositionInitData> {
    let tick_delta = calculate_tick_delta(tick_spacing, minimum_range, concentration);
    let half_width = tick_delta
        .checked_add(minimum_range / 2)
        .and_then(|steps| steps.checked_mul(tick_spacing))
        .ok_or(MathError::Overflow)?;

    let lower_tick = current_tick.checked_sub(half_width).ok_or(MathError::Overflow)?;
    let upper_tick = current_tick.checked_add(half_width).ok_or(MathError::Overflow)?;

    if by_amount_x {
        let result = get_liquidity_by_x(env, amount, lower_tick, upper_tick, current_sqrt_price, rounding_up)?;
        Ok(PositionInitData {
            lower_tick,
            upper_tick,
            liquidity: result.liquidity,
            amount_x: amount,
            amount_y: result.amount,
        })
    } else {
        let result = get_liquidity_by_y(env, amount, lower_tick, upper_tick, current_sqrt_price, rounding_up)?;
        Ok(PositionInitData {
            lower_tick,
            upper_tick,
            liquidity: result.liquidity,
            amount_x: result.amount,
            amount_y: amount,
        })
    }
}
