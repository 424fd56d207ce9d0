// Active Range Detection
//
// Compares two tick snapshots of one pool. Ticks whose fee growth moved
// between them bound the range that traded; its token X is what earned fees.

use std::collections::BTreeMap;

use soroban_sdk::Env;
use tidal_math::{calculate_price_sqrt, get_x_from_liquidity, MathError, MathResult};
use tidal_tick::Tick;
use crate::error::AnalyticsError;
use crate::types::{LiquidityRange, ParsedTick, Range, TickLiquidity};

fn signed_change(tick: &Tick) -> i128 {
    let change = i128::try_from(tick.liquidity_change).unwrap_or(i128::MAX);
    if tick.sign {
        change
    } else {
        -change
    }
}

fn sorted(ticks: &[Tick]) -> Vec<&Tick> {
    let mut sorted: Vec<&Tick> = ticks.iter().collect();
    sorted.sort_by_key(|tick| tick.index);
    sorted
}

// ============================================================
// PARSING
// ============================================================

/// Running liquidity over the ticks in index order
pub fn parse_liquidity_on_ticks(ticks: &[Tick]) -> Vec<TickLiquidity> {
    let mut liquidity: i128 = 0;

    sorted(ticks)
        .into_iter()
        .map(|tick| {
            liquidity = liquidity.saturating_add(signed_change(tick));
            TickLiquidity { index: tick.index, liquidity }
        })
        .collect()
}

/// Running liquidity with fee growth, both as a sorted list and keyed by index
pub fn parse_fee_growth_and_liquidity_on_ticks(
    ticks: &[Tick],
) -> (Vec<ParsedTick>, BTreeMap<i32, ParsedTick>) {
    let mut liquidity: i128 = 0;

    let parsed: Vec<ParsedTick> = sorted(ticks)
        .into_iter()
        .map(|tick| {
            liquidity = liquidity.saturating_add(signed_change(tick));
            ParsedTick {
                index: tick.index,
                liquidity,
                fee_growth_outside_x: tick.fee_growth_outside_x,
                fee_growth_outside_y: tick.fee_growth_outside_y,
            }
        })
        .collect();

    let by_index = parsed.iter().map(|tick| (tick.index, *tick)).collect();
    (parsed, by_index)
}

// ============================================================
// RANGE QUERIES
// ============================================================

/// Token X held between consecutive ticks whose lower index is in [lower, upper)
///
/// Segments with no positive liquidity hold nothing.
pub fn get_token_x_in_range(
    env: &Env,
    ticks: &[ParsedTick],
    lower_tick: i32,
    upper_tick: i32,
) -> MathResult<u128> {
    let mut sum: u128 = 0;

    for pair in ticks.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.index < lower_tick || current.index >= upper_tick || current.liquidity <= 0 {
            continue;
        }

        let lower_sqrt_price = calculate_price_sqrt(current.index)?;
        let upper_sqrt_price = calculate_price_sqrt(next.index)?;
        let amount = get_x_from_liquidity(env, current.liquidity as u128, upper_sqrt_price, lower_sqrt_price)?;

        sum = sum.checked_add(amount as u128).ok_or(MathError::Overflow)?;
    }

    Ok(sum)
}

/// Range spanned by the ticks whose fee growth changed between snapshots
///
/// The last tick of the previous snapshot is never inspected. A single
/// changed tick is widened to the tick after it.
pub fn get_range_based_on_fee_growth(
    previous: &[ParsedTick],
    current: &BTreeMap<i32, ParsedTick>,
) -> Option<LiquidityRange> {
    let mut range: Option<(usize, i32, i32)> = None;

    for (position, previous_tick) in previous.iter().enumerate().take(previous.len().saturating_sub(1)) {
        let Some(current_tick) = current.get(&previous_tick.index) else {
            continue;
        };

        let unchanged = previous_tick.fee_growth_outside_x == current_tick.fee_growth_outside_x
            && previous_tick.fee_growth_outside_y == current_tick.fee_growth_outside_y;
        if unchanged {
            continue;
        }

        range = match range {
            None => Some((position, previous_tick.index, current_tick.index)),
            Some((first, lower, _)) => Some((first, lower, current_tick.index)),
        };
    }

    let (first, tick_lower, mut tick_upper) = range?;
    if tick_lower == tick_upper {
        tick_upper = previous.get(first + 1)?.index;
    }

    Some(LiquidityRange { tick_lower, tick_upper })
}

/// Consecutive ticks enclosing the current tick
pub fn get_ticks_from_swap_range(ticks: &[ParsedTick], current_tick: i32) -> Option<LiquidityRange> {
    ticks
        .windows(2)
        .find(|pair| pair[0].index <= current_tick && pair[1].index >= current_tick)
        .map(|pair| LiquidityRange {
            tick_lower: pair[0].index,
            tick_upper: pair[1].index,
        })
}

/// Token X in the range that traded between two snapshots
///
/// # Arguments
/// * `ticks_previous_snapshot` - Ticks of the pool at the earlier snapshot
/// * `ticks_current_snapshot` - Ticks of the pool now
/// * `current_tick` - Current tick of the pool
///
/// # Returns
/// The range and its token X. With one snapshot empty the other's full
/// span is used; without fee growth changes the range around the current
/// tick is used.
pub fn calculate_token_x_in_range(
    env: &Env,
    ticks_previous_snapshot: &[Tick],
    ticks_current_snapshot: &[Tick],
    current_tick: i32,
) -> Result<Range, AnalyticsError> {
    let (previous, _) = parse_fee_growth_and_liquidity_on_ticks(ticks_previous_snapshot);
    let (current, current_by_index) = parse_fee_growth_and_liquidity_on_ticks(ticks_current_snapshot);

    let only = match (previous.is_empty(), current.is_empty()) {
        (true, true) => return Err(AnalyticsError::TickArrayIsEmpty),
        (false, true) => Some(&previous),
        (true, false) => Some(&current),
        (false, false) => None,
    };

    if let Some(ticks) = only {
        let (Some(first), Some(last)) = (ticks.first(), ticks.last()) else {
            return Err(AnalyticsError::TickArrayIsEmpty);
        };
        let (tick_lower, tick_upper) = (first.index, last.index);
        let token_x_amount = get_token_x_in_range(env, ticks, tick_lower, tick_upper)?;
        return Ok(Range { token_x_amount, tick_lower, tick_upper });
    }

    let range = get_range_based_on_fee_growth(&previous, &current_by_index)
        .or_else(|| get_ticks_from_swap_range(&current, current_tick))
        .ok_or(AnalyticsError::TickNotFound)?;

    let token_x_amount = get_token_x_in_range(env, &current, range.tick_lower, range.tick_upper)?;

    Ok(Range {
        token_x_amount,
        tick_lower: range.tick_lower,
        tick_upper: range.tick_upper,
    })
}
