// Property-Based Testing with Proptest
// Run with: cargo test -p tidal-analytics --test test_proptest

use tidal_analytics::*;
use tidal_tick::Tick;
use soroban_sdk::Env;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: token X over a span is the sum over its segments
    #[test]
    fn prop_token_x_splits_at_ticks(
        liquidity in 1u128..1_000_000_000_000_000_000,
        width in 1i32..500,
        split in 1i32..500
    ) {
        let env = Env::default();
        let (lower, middle, upper) = (-width, split - width, split + width);
        let ticks: Vec<Tick> = [(lower, true), (middle, true), (upper, false)]
            .into_iter()
            .map(|(index, sign)| Tick { index, sign, liquidity_change: liquidity, ..Default::default() })
            .collect();
        let (parsed, _) = parse_fee_growth_and_liquidity_on_ticks(&ticks);

        let whole = get_token_x_in_range(&env, &parsed, lower, upper).unwrap();
        let below = get_token_x_in_range(&env, &parsed, lower, middle).unwrap();
        let above = get_token_x_in_range(&env, &parsed, middle, upper).unwrap();
        prop_assert_eq!(whole, below + above);
    }

    /// Property: volume at a flat price is plain addition
    #[test]
    fn prop_volume_at_unit_price(volume_x in any::<u64>(), volume_y in any::<u64>()) {
        let env = Env::default();
        let unit = tidal_math::PRICE_DENOMINATOR;

        let volume = get_volume(&env, volume_x, volume_y, unit, unit).unwrap();
        prop_assert_eq!(volume, volume_x as u128 + volume_y as u128);
    }
}
