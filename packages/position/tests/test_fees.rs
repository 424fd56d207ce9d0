use tidal_position::*;
use tidal_tick::Tick;
use tidal_math::{DENOMINATOR, GROWTH_DENOMINATOR, LIQUIDITY_DENOMINATOR};
use soroban_sdk::Env;

// ============================================================
// TOKENS OWED TESTS
// ============================================================

#[test]
fn test_tokens_owed_zero_liquidity() {
    let env = Env::default();
    let position = Position::default();

    let owed = calculate_tokens_owed(&env, &position, 5 * GROWTH_DENOMINATOR, 5 * GROWTH_DENOMINATOR).unwrap();
    assert_eq!(owed, (0, 0));
}

#[test]
fn test_tokens_owed_zero_liquidity_keeps_owed() {
    let env = Env::default();
    let position = Position {
        fee_growth_inside_x: 4 * GROWTH_DENOMINATOR,
        fee_growth_inside_y: 4 * GROWTH_DENOMINATOR,
        tokens_owed_x: 100 * DENOMINATOR,
        tokens_owed_y: 100 * DENOMINATOR,
        ..Default::default()
    };

    let owed = calculate_tokens_owed(&env, &position, 5 * GROWTH_DENOMINATOR, 5 * GROWTH_DENOMINATOR).unwrap();
    assert_eq!(owed, (100, 100), "No liquidity earns nothing new");
}

#[test]
fn test_tokens_owed_accrues() {
    let env = Env::default();
    let position = Position {
        liquidity: LIQUIDITY_DENOMINATOR,
        fee_growth_inside_x: 4 * GROWTH_DENOMINATOR,
        fee_growth_inside_y: 4 * GROWTH_DENOMINATOR,
        tokens_owed_x: 100 * DENOMINATOR,
        tokens_owed_y: 100 * DENOMINATOR,
        ..Default::default()
    };

    let owed = calculate_tokens_owed(&env, &position, 5 * GROWTH_DENOMINATOR, 5 * GROWTH_DENOMINATOR).unwrap();
    assert_eq!(owed, (101, 101));
}

#[test]
fn test_tokens_owed_across_wrap() {
    let env = Env::default();
    let position = Position {
        liquidity: LIQUIDITY_DENOMINATOR,
        fee_growth_inside_x: u128::MAX - GROWTH_DENOMINATOR + 1,
        ..Default::default()
    };

    let owed = calculate_tokens_owed(&env, &position, GROWTH_DENOMINATOR, 0).unwrap();
    assert_eq!(owed, (2, 0), "Growth wrapped past 2^128 still counts");
}

// ============================================================
// CLAIM TESTS
// ============================================================

fn boundary(index: i32, sign: bool) -> Tick {
    Tick { index, sign, ..Default::default() }
}

#[test]
fn test_claim_basic() {
    let env = Env::default();
    let position = Position {
        liquidity: LIQUIDITY_DENOMINATOR,
        lower_tick_index: -2,
        upper_tick_index: 2,
        fee_growth_inside_x: 4 * GROWTH_DENOMINATOR,
        fee_growth_inside_y: 4 * GROWTH_DENOMINATOR,
        tokens_owed_x: 100 * DENOMINATOR,
        tokens_owed_y: 100 * DENOMINATOR,
    };

    let claim = calculate_claim_amount(
        &env,
        &position,
        &boundary(-2, true),
        &boundary(2, true),
        0,
        20 * GROWTH_DENOMINATOR,
        20 * GROWTH_DENOMINATOR,
    )
    .unwrap();

    assert_eq!(claim, (116, 116));
}

#[test]
fn test_claim_external_data() {
    let env = Env::default();
    let position = Position {
        liquidity: 0x1479A26FE2A3C0,
        lower_tick_index: 21109,
        upper_tick_index: 21129,
        fee_growth_inside_x: 0xffffffffffffffffffc8ee8de34d553d,
        fee_growth_inside_y: 0xffffffffffffffffffd3fd7d514848b6,
        tokens_owed_x: 0,
        tokens_owed_y: 0,
    };
    let lower = Tick {
        index: 21109,
        sign: true,
        liquidity_change: 0xB9C6974437BF7F6B,
        liquidity_gross: 0xB9C6974437BF7F6B,
        sqrt_price: 0x029cf3124f61,
        fee_growth_outside_x: 0x0c4fee04dd2b3b8c,
        fee_growth_outside_y: 0x01a99cb6b2bd6911e7,
        seconds_per_liquidity_outside: 0,
    };
    let upper = Tick {
        index: 21129,
        sign: false,
        liquidity_change: 0xA780979938ACD0B8,
        liquidity_gross: 0xC2B41DADE9987A38,
        sqrt_price: 0x029d9e665157,
        fee_growth_outside_x: 0x3b9f3a68b9c225,
        fee_growth_outside_y: 0x2c0282aeb7b74a,
        seconds_per_liquidity_outside: 0,
    };

    let claim = calculate_claim_amount(
        &env,
        &position,
        &lower,
        &upper,
        0,
        20 * GROWTH_DENOMINATOR,
        20 * GROWTH_DENOMINATOR,
    )
    .unwrap();

    assert_eq!(claim, (5105, 176750));
}
