// SPDX-License-Identifier: MIT
// Tick Utilities
//
// Ticks live on a grid of `tick_spacing`. Helpers here map prices back to
// grid ticks and bound searches to the tickmap and the price range.

use soroban_sdk::{Env, Vec};
use crate::constants::{MAX_TICK, TICK_LIMIT, TICK_SEARCH_RANGE};
use crate::error::{MathError, MathResult};
use crate::sqrt_price::calculate_price_sqrt;

// ============================================================
// ALIGNMENT & BOUNDS
// ============================================================

/// Snap a tick down to the grid
///
/// Positive ticks drop their remainder; zero and negative ticks use the
/// euclidean remainder, so both branches round toward negative infinity.
/// `tick_spacing` must be positive.
pub fn align_tick_to_spacing(tick: i32, tick_spacing: i32) -> i32 {
    if tick > 0 {
        tick - tick % tick_spacing
    } else {
        tick - ((tick % tick_spacing + tick_spacing) % tick_spacing)
    }
}

/// Highest usable tick for a spacing
pub fn get_max_tick(tick_spacing: i32) -> i32 {
    let price_limit = MAX_TICK - MAX_TICK % tick_spacing;
    let array_limit = TICK_LIMIT * tick_spacing - tick_spacing;
    price_limit.min(array_limit)
}

/// Lowest usable tick for a spacing
pub fn get_min_tick(tick_spacing: i32) -> i32 {
    let price_limit = -MAX_TICK + MAX_TICK % tick_spacing;
    let array_limit = -TICK_LIMIT * tick_spacing;
    price_limit.max(array_limit)
}

/// Furthest tick a bitmap search may reach from `tick`
///
/// Clamped to the search range, the tickmap and the price range; never
/// an error. `tick_spacing` must be positive.
pub fn get_search_limit(tick: i32, tick_spacing: i32, up: bool) -> i32 {
    let index = tick / tick_spacing;

    let limit = if up {
        let range_limit = index + TICK_SEARCH_RANGE;
        let array_limit = TICK_LIMIT - 1;
        let price_limit = MAX_TICK / tick_spacing;
        range_limit.min(array_limit).min(price_limit)
    } else {
        let range_limit = index - TICK_SEARCH_RANGE;
        let array_limit = -TICK_LIMIT + 1;
        let price_limit = -MAX_TICK / tick_spacing;
        range_limit.max(array_limit).max(price_limit)
    };

    limit * tick_spacing
}

/// Validate a single position boundary
pub fn check_tick(tick: i32, tick_spacing: i32) -> MathResult<()> {
    if tick_spacing <= 0 {
        return Err(MathError::InvalidTickSpacing);
    }
    if tick % tick_spacing != 0 {
        return Err(MathError::TickNotAligned);
    }
    let index = tick / tick_spacing;
    if index <= -TICK_LIMIT || index >= TICK_LIMIT - 1 {
        return Err(MathError::TickOutOfRange);
    }
    if tick.unsigned_abs() >= MAX_TICK as u32 {
        return Err(MathError::TickOutOfRange);
    }
    Ok(())
}

/// Validate a position range
pub fn check_ticks(lower_tick: i32, upper_tick: i32, tick_spacing: i32) -> MathResult<()> {
    if lower_tick >= upper_tick {
        return Err(MathError::InvalidTickRange);
    }
    check_tick(lower_tick, tick_spacing)?;
    check_tick(upper_tick, tick_spacing)
}

// ============================================================
// PRICE -> TICK
// ============================================================

/// Binary search of the grid indices in `[low / s, high / s)`
///
/// Returns the exact tick when the price matches one, otherwise the highest
/// candidate whose price is below the target, or the low bound when none is.
pub fn price_to_tick_in_range(
    sqrt_price: u128,
    low: i32,
    high: i32,
    tick_spacing: i32,
) -> MathResult<i32> {
    if tick_spacing <= 0 {
        return Err(MathError::InvalidTickSpacing);
    }
    let mut low = low.div_euclid(tick_spacing);
    let mut high = high.div_euclid(tick_spacing);

    while high - low > 1 {
        let mid = low + (high - low) / 2;
        let mid_price = calculate_price_sqrt(mid * tick_spacing)?;

        if mid_price == sqrt_price {
            return Ok(mid * tick_spacing);
        }
        if mid_price < sqrt_price {
            low = mid;
        } else {
            high = mid;
        }
    }

    Ok(low * tick_spacing)
}

/// Grid tick holding `sqrt_price`, searched on the trade side of `current_tick`
///
/// The window includes `current_tick` and ends at the bitmap search limit.
pub fn get_tick_from_price(
    current_tick: i32,
    tick_spacing: i32,
    sqrt_price: u128,
    x_to_y: bool,
) -> MathResult<i32> {
    if tick_spacing <= 0 {
        return Err(MathError::InvalidTickSpacing);
    }
    if current_tick % tick_spacing != 0 {
        return Err(MathError::TickNotAligned);
    }

    let (low, high) = if x_to_y {
        let limit = get_search_limit(current_tick, tick_spacing, false);
        (limit.min(current_tick), current_tick)
    } else {
        let limit = get_search_limit(current_tick, tick_spacing, true);
        (current_tick, limit.max(current_tick))
    };

    price_to_tick_in_range(sqrt_price, low, high + tick_spacing, tick_spacing)
}

// ============================================================
// TICK ARRAYS
// ============================================================

/// Every grid tick from `start` to `stop` inclusive, walking by `step`
pub fn generate_ticks_array(env: &Env, start: i32, stop: i32, step: i32) -> MathResult<Vec<i32>> {
    let valid = start.checked_rem(step) == Some(0)
        && stop.checked_rem(step) == Some(0)
        && ((step > 0 && start <= stop) || (step < 0 && start >= stop));
    if !valid {
        return Err(MathError::InvalidTickArrayParameters);
    }

    let mut ticks = Vec::new(env);
    let mut tick = start;
    loop {
        ticks.push_back(tick);
        if tick == stop {
            break;
        }
        tick += step;
    }
    Ok(ticks)
}
