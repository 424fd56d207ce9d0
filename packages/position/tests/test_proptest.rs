// Property-Based Testing with Proptest
// Run with: cargo test -p tidal-position --test test_proptest

use tidal_position::*;
use soroban_sdk::Env;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: checkpointing first never changes what a claim pays out
    #[test]
    fn prop_checkpoint_preserves_claim(
        liquidity in 0u128..10_000_000_000,
        checkpoint in any::<u128>(),
        growth in any::<u128>(),
        owed in 0u128..1_000_000_000_000_000_000
    ) {
        let env = Env::default();
        let mut position = Position {
            liquidity,
            fee_growth_inside_x: checkpoint,
            tokens_owed_x: owed,
            ..Default::default()
        };

        let direct = calculate_tokens_owed(&env, &position, growth, 0).unwrap();
        update_position(&env, &mut position, growth, 0).unwrap();
        let after_update = calculate_tokens_owed(&env, &position, growth, 0).unwrap();

        prop_assert_eq!(direct, after_update);
    }

    /// Property: concentration falls as the range widens
    #[test]
    fn prop_concentration_decreasing(spacing in 1i32..=100, minimum_range in 2i32..=20, n in 0i32..500) {
        let narrow = calculate_concentration(spacing, minimum_range, n);
        let wide = calculate_concentration(spacing, minimum_range, n + 1);
        prop_assert!(wide < narrow);
    }
}
