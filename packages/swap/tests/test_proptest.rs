// Property-Based Testing with Proptest
// Run with: cargo test -p tidal-swap --test test_proptest

use tidal_swap::*;
use tidal_tick::{Tick, Tickmap};
use tidal_math::{calculate_price_sqrt, LIQUIDITY_DENOMINATOR, PRICE_DENOMINATOR};
use soroban_sdk::{Env, Map};
use proptest::prelude::*;

fn fixture(env: &Env) -> (Tickmap, Map<i32, Tick>) {
    let mut ticks = Map::new(env);
    let mut tickmap = Tickmap::default();
    for (index, sign, units) in [(-100, true, 1_000_000u128), (-50, true, 500_000), (30, false, 500_000), (100, false, 1_000_000)] {
        let liquidity = units * LIQUIDITY_DENOMINATOR;
        ticks.set(
            index,
            Tick {
                index,
                sign,
                liquidity_change: liquidity,
                liquidity_gross: liquidity,
                sqrt_price: calculate_price_sqrt(index).unwrap(),
                ..Default::default()
            },
        );
        tickmap.flip(true, index, 10).unwrap();
    }
    (tickmap, ticks)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: by input, the whole amount is spent unless the swap stopped early
    #[test]
    fn prop_input_fully_accounted(amount in 1u64..20_000, x_to_y in any::<bool>()) {
        let env = Env::default();
        let (tickmap, ticks) = fixture(&env);
        let limit_tick = if x_to_y { -1000 } else { 1000 };
        let params = SwapParameters {
            x_to_y,
            swap_amount: amount,
            by_amount_in: true,
            slippage: 0,
            price_limit: calculate_price_sqrt(limit_tick).unwrap(),
            pool: PoolSnapshot {
                current_tick_index: 0,
                tick_spacing: 10,
                liquidity: 1_500_000 * LIQUIDITY_DENOMINATOR,
                sqrt_price: PRICE_DENOMINATOR,
                fee: 600_000_000,
                ..Default::default()
            },
        };

        let result = simulate_swap(&env, &params, &tickmap, &ticks).unwrap();
        let spent = result.accumulated_amount_in + result.accumulated_fee;

        prop_assert!(spent <= amount);
        if matches!(result.status, SimulationStatus::Ok | SimulationStatus::NoGainSwap) {
            prop_assert_eq!(spent, amount);
        }
        if x_to_y {
            prop_assert!(result.price_after_swap <= PRICE_DENOMINATOR);
        } else {
            prop_assert!(result.price_after_swap >= PRICE_DENOMINATOR);
        }
    }

    /// Property: by output, any request ends in a status and never overpays
    #[test]
    fn prop_output_request_never_fails(amount in 1u64..50_000_000, x_to_y in any::<bool>()) {
        let env = Env::default();
        let (tickmap, ticks) = fixture(&env);
        let limit_tick = if x_to_y { -1000 } else { 1000 };
        let params = SwapParameters {
            x_to_y,
            swap_amount: amount,
            by_amount_in: false,
            slippage: 0,
            price_limit: calculate_price_sqrt(limit_tick).unwrap(),
            pool: PoolSnapshot {
                current_tick_index: 0,
                tick_spacing: 10,
                liquidity: 1_500_000 * LIQUIDITY_DENOMINATOR,
                sqrt_price: PRICE_DENOMINATOR,
                fee: 600_000_000,
                ..Default::default()
            },
        };

        let result = simulate_swap(&env, &params, &tickmap, &ticks);
        prop_assert!(result.is_ok(), "amount {} x_to_y {}", amount, x_to_y);
        let result = result.unwrap();
        prop_assert!(result.accumulated_amount_out <= amount);
    }
}
