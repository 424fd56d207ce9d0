// Tick Search
//
// Nearest-neighbour queries over the tickmap, used to bound swap steps and
// to pick which ticks a caller should prefetch.

use soroban_sdk::{contracttype, Env, Vec};
use tidal_math::{calculate_price_sqrt, get_search_limit, MathResult};
use crate::bitmap::{tick_to_position, Tickmap};

/// Price a swap step may reach, and the initialized tick sitting there
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloserLimit {
    pub swap_limit: u128,
    pub limiting_tick: Option<i32>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchDirection {
    Up,
    Down,
}

/// Closer of the next initialized tick and the slippage limit
///
/// # Arguments
/// * `sqrt_price_limit` - Slippage-adjusted price limit of the swap
/// * `x_to_y` - Trade direction; x to y moves the price down
/// * `current_tick` - Aligned tick of the current price
/// * `tick_spacing` - Pool tick spacing
/// * `tickmap` - Snapshot of the pool's tickmap
///
/// # Returns
/// The limit price, with `limiting_tick` set only when an initialized tick
/// is closer than the slippage limit
pub fn get_closer_limit(
    sqrt_price_limit: u128,
    x_to_y: bool,
    current_tick: i32,
    tick_spacing: i32,
    tickmap: &Tickmap,
) -> MathResult<CloserLimit> {
    let closest_tick = if x_to_y {
        tickmap.prev_initialized(current_tick, tick_spacing)
    } else {
        tickmap.next_initialized(current_tick, tick_spacing)
    };

    let (index, initialized) = match closest_tick {
        Some(index) => (index, true),
        None => (get_search_limit(current_tick, tick_spacing, !x_to_y), false),
    };

    let sqrt_price = calculate_price_sqrt(index)?;

    let is_closer = if x_to_y {
        sqrt_price > sqrt_price_limit
    } else {
        sqrt_price < sqrt_price_limit
    };

    if is_closer {
        Ok(CloserLimit {
            swap_limit: sqrt_price,
            limiting_tick: if initialized { Some(index) } else { None },
        })
    } else {
        Ok(CloserLimit {
            swap_limit: sqrt_price_limit,
            limiting_tick: None,
        })
    }
}

/// Initialized ticks closest to `from`, sorted ascending
///
/// The downward side starts at `from` itself, the upward side one step
/// above it. Without a direction both sides are taken in distance order.
/// Stops after `limit` ticks, `max_range` grid steps when given, or at the
/// tickmap edge.
pub fn find_closest_ticks(
    env: &Env,
    tickmap: &Tickmap,
    from: i32,
    tick_spacing: i32,
    limit: u32,
    max_range: Option<u32>,
    direction: Option<SearchDirection>,
) -> Vec<i32> {
    let mut below: Vec<i32> = Vec::new(env);
    let mut above: Vec<i32> = Vec::new(env);

    let search_down = direction != Some(SearchDirection::Up);
    let search_up = direction != Some(SearchDirection::Down);

    let max_range = max_range.map_or(u64::MAX, u64::from);

    let mut step: i64 = 0;
    while (step as u64) < max_range {
        let down = from as i64 - step * tick_spacing as i64;
        let up = from as i64 + (step + 1) * tick_spacing as i64;

        let down_in_map = search_down && in_tickmap(down, tick_spacing);
        let up_in_map = search_up && in_tickmap(up, tick_spacing);
        if !down_in_map && !up_in_map {
            break;
        }

        if down_in_map && below.len() + above.len() < limit && tickmap.get(down as i32, tick_spacing) {
            below.push_front(down as i32);
        }
        if up_in_map && below.len() + above.len() < limit && tickmap.get(up as i32, tick_spacing) {
            above.push_back(up as i32);
        }
        if below.len() + above.len() >= limit {
            break;
        }
        step += 1;
    }

    below.append(&above);
    below
}

fn in_tickmap(tick: i64, tick_spacing: i32) -> bool {
    i32::try_from(tick)
        .map(|tick| tick_to_position(tick, tick_spacing).is_ok())
        .unwrap_or(false)
}
