// Fee Growth Calculations
//
// Accumulators wrap at 2^128; every difference uses wrapping arithmetic.

use tidal_math::{DENOMINATOR, LIQUIDITY_DENOMINATOR};
use crate::types::Tick;

/// Fee growth per unit of liquidity inside [lower, upper]
///
/// # Returns
/// (fee_growth_inside_x, fee_growth_inside_y)
pub fn calculate_fee_growth_inside(
    lower_tick: &Tick,
    upper_tick: &Tick,
    current_tick: i32,
    fee_growth_global_x: u128,
    fee_growth_global_y: u128,
) -> (u128, u128) {
    let (fee_growth_below_x, fee_growth_below_y) = if current_tick >= lower_tick.index {
        (lower_tick.fee_growth_outside_x, lower_tick.fee_growth_outside_y)
    } else {
        (
            fee_growth_global_x.wrapping_sub(lower_tick.fee_growth_outside_x),
            fee_growth_global_y.wrapping_sub(lower_tick.fee_growth_outside_y),
        )
    };

    let (fee_growth_above_x, fee_growth_above_y) = if current_tick < upper_tick.index {
        (upper_tick.fee_growth_outside_x, upper_tick.fee_growth_outside_y)
    } else {
        (
            fee_growth_global_x.wrapping_sub(upper_tick.fee_growth_outside_x),
            fee_growth_global_y.wrapping_sub(upper_tick.fee_growth_outside_y),
        )
    };

    let fee_growth_inside_x = fee_growth_global_x
        .wrapping_sub(fee_growth_below_x)
        .wrapping_sub(fee_growth_above_x);

    let fee_growth_inside_y = fee_growth_global_y
        .wrapping_sub(fee_growth_below_y)
        .wrapping_sub(fee_growth_above_y);

    (fee_growth_inside_x, fee_growth_inside_y)
}

/// Global seconds per liquidity advanced to `now`
///
/// Left unchanged with no active liquidity or when time has not moved.
pub fn calculate_seconds_per_liquidity_global(
    seconds_per_liquidity_global: u128,
    liquidity: u128,
    last_timestamp: u64,
    now: u64,
) -> u128 {
    if liquidity == 0 || now <= last_timestamp {
        return seconds_per_liquidity_global;
    }

    let elapsed = (now - last_timestamp) as u128;
    let delta = elapsed * DENOMINATOR * LIQUIDITY_DENOMINATOR / liquidity;
    seconds_per_liquidity_global.wrapping_add(delta)
}

/// Seconds per liquidity spent inside [lower, upper], as of `now`
pub fn calculate_seconds_per_liquidity_inside(
    lower_tick: &Tick,
    upper_tick: &Tick,
    current_tick: i32,
    liquidity: u128,
    seconds_per_liquidity_global: u128,
    last_timestamp: u64,
    now: u64,
) -> u128 {
    let global = calculate_seconds_per_liquidity_global(
        seconds_per_liquidity_global,
        liquidity,
        last_timestamp,
        now,
    );

    let below = if current_tick >= lower_tick.index {
        lower_tick.seconds_per_liquidity_outside
    } else {
        global.wrapping_sub(lower_tick.seconds_per_liquidity_outside)
    };

    let above = if current_tick < upper_tick.index {
        upper_tick.seconds_per_liquidity_outside
    } else {
        global.wrapping_sub(upper_tick.seconds_per_liquidity_outside)
    };

    global.wrapping_sub(below).wrapping_sub(above)
}
