// Shared snapshot fixtures

use tidal_math::LIQUIDITY_DENOMINATOR;
use tidal_tick::Tick;

/// Liquidity of each fixture position
pub const POSITION_LIQUIDITY: u128 = 10_000_000_000_000 * LIQUIDITY_DENOMINATOR;

/// Two overlapping positions, [-20, 20] and [-10, 10]
pub fn previous_snapshot() -> Vec<Tick> {
    [(-20, true), (-10, true), (10, false), (20, false)]
        .into_iter()
        .map(|(index, sign)| Tick {
            index,
            sign,
            liquidity_change: POSITION_LIQUIDITY,
            liquidity_gross: POSITION_LIQUIDITY,
            ..Default::default()
        })
        .collect()
}

/// The previous snapshot after a swap crossed ticks -10 and 10
pub fn current_snapshot() -> Vec<Tick> {
    previous_snapshot()
        .into_iter()
        .map(|tick| {
            if tick.index.abs() == 10 {
                Tick { fee_growth_outside_x: tick.fee_growth_outside_x + 10, ..tick }
            } else {
                tick
            }
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-12;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}
