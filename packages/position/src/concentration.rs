// Concentration
//
// Concentration compares the liquidity a range buys with a full-range
// position funded by the same amount. `n` counts extra grid steps added on
// each side of the minimum range.

use tidal_math::{align_tick_to_spacing, CONCENTRATION_FACTOR, MAX_TICK};
use crate::error::PositionError;

const TICK_BASE: f64 = 1.0001;

/// Concentration of a range `minimum_range + 2n` grid steps wide
pub fn calculate_concentration(tick_spacing: i32, minimum_range: i32, n: i32) -> f64 {
    let width = minimum_range as f64 + 2.0 * n as f64;
    let exponent = -(tick_spacing as f64) * width / 4.0;
    let concentration = 1.0 / (1.0 - TICK_BASE.powf(exponent));
    concentration / CONCENTRATION_FACTOR
}

/// Inverse of `calculate_concentration`: extra grid steps on each side
pub fn calculate_tick_delta(tick_spacing: i32, minimum_range: i32, concentration: f64) -> i32 {
    let base = TICK_BASE.powf(-(tick_spacing as f64 / 4.0));
    let log_arg = (1.0 - 1.0 / (concentration * CONCENTRATION_FACTOR))
        / TICK_BASE.powf(-(tick_spacing as f64) * minimum_range as f64 / 4.0);

    (log_arg.ln() / base.ln() / 2.0).ceil() as i32
}

/// Concentrations selectable around `current_tick`, highest first
///
/// Exact figures are listed while consecutive values differ by at least one,
/// then whole numbers down to 2. The list is cut where the range would run
/// past the highest aligned tick.
pub fn get_concentration_array(
    tick_spacing: i32,
    minimum_range: i32,
    current_tick: i32,
) -> Result<Vec<f64>, PositionError> {
    let mut concentrations = Vec::new();
    let mut counter = 0;
    let mut last = calculate_concentration(tick_spacing, minimum_range, counter) + 1.0;
    let mut delta = 1.0;

    while delta >= 1.0 {
        let concentration = calculate_concentration(tick_spacing, minimum_range, counter);
        concentrations.push(concentration);
        delta = last - concentration;
        last = concentration;
        counter += 1;
    }

    let mut whole = last.ceil();
    while whole > 1.0 {
        concentrations.push(whole);
        whole -= 1.0;
    }

    let max_tick = align_tick_to_spacing(MAX_TICK, tick_spacing) as f64;
    let half_range = minimum_range as f64 / 2.0 * tick_spacing as f64;
    let room = max_tick - (current_tick as f64).abs();
    if half_range > room {
        return Err(PositionError::RangeLimitReached);
    }

    let limit_index = ((room - half_range) / tick_spacing as f64) as usize;
    concentrations.truncate(limit_index);
    Ok(concentrations)
}
