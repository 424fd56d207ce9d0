use tidal_math::*;
use soroban_sdk::Env;

// ============================================================
// MUL-DIV TESTS
// ============================================================

#[test]
fn test_mul_div_floor_and_ceil() {
    let env = Env::default();

    assert_eq!(mul_div_floor(&env, 10, 10, 3).unwrap(), 33);
    assert_eq!(mul_div_ceil(&env, 10, 10, 3).unwrap(), 34);
    assert_eq!(mul_div_ceil(&env, 10, 9, 3).unwrap(), 30, "Exact quotient should not round up");
}

#[test]
fn test_mul_div_wide_intermediate() {
    let env = Env::default();

    // product exceeds u128 but the quotient fits
    let result = mul_div_floor(&env, u128::MAX, 1_000_000, 1_000_000).unwrap();
    assert_eq!(result, u128::MAX);
}

#[test]
fn test_mul_div_errors() {
    let env = Env::default();

    assert_eq!(mul_div_floor(&env, 1, 1, 0), Err(MathError::DivisionByZero));
    assert_eq!(mul_div_floor(&env, u128::MAX, u128::MAX, 1), Err(MathError::Overflow));
}

#[test]
fn test_div_up() {
    assert_eq!(div_up(7, 2).unwrap(), 4);
    assert_eq!(div_up(8, 2).unwrap(), 4);
    assert_eq!(div_up(0, 5).unwrap(), 0);
    assert_eq!(div_up(1, 0), Err(MathError::DivisionByZero));
}

#[test]
fn test_checked_mul_overflow() {
    let env = Env::default();
    let big = u256(&env, u128::MAX);

    let squared = checked_mul(&env, &big, &big).unwrap();
    assert!(checked_mul(&env, &squared, &u256(&env, 2)).is_err(), "2^257 should not fit");
    assert_eq!(checked_mul(&env, &squared, &u256(&env, 0)).unwrap(), u256(&env, 0));
}

#[test]
fn test_to_token_narrowing() {
    let env = Env::default();

    assert_eq!(to_token(&u256(&env, u64::MAX as u128)).unwrap(), u64::MAX);
    assert_eq!(to_token(&u256(&env, u64::MAX as u128 + 1)), Err(MathError::Overflow));
}

// ============================================================
// SQUARE ROOT TESTS
// ============================================================

#[test]
fn test_sqrt_u128() {
    assert_eq!(sqrt_u128(0), 0);
    assert_eq!(sqrt_u128(1), 1);
    assert_eq!(sqrt_u128(2), 1);
    assert_eq!(sqrt_u128(3), 1);
    assert_eq!(sqrt_u128(4), 2);
    assert_eq!(sqrt_u128(99), 9);
    assert_eq!(sqrt_u128(1_000_000_000_000_000_000_000_000), 1_000_000_000_000);
    assert_eq!(sqrt_u128(u128::MAX), u64::MAX as u128);
}

#[test]
fn test_sqrt_u256() {
    let env = Env::default();

    let square = u256(&env, PRICE_DENOMINATOR).mul(&u256(&env, PRICE_DENOMINATOR));
    assert_eq!(sqrt_u256(&env, &square), u256(&env, PRICE_DENOMINATOR));

    let below = square.sub(&u256(&env, 1));
    assert_eq!(sqrt_u256(&env, &below), u256(&env, PRICE_DENOMINATOR - 1));
}

// ============================================================
// CONSTRUCTOR & FEE TIER TESTS
// ============================================================

#[test]
fn test_constructors() {
    assert_eq!(to_percent(1, 2), Ok(DENOMINATOR / 100), "1% should be 10^10");
    assert_eq!(to_percent(6, 4), Ok(600_000_000), "0.06% should be 6 * 10^8");
    assert_eq!(to_decimal(5, 1), to_percent(5, 1));
    assert_eq!(to_price(1, 0), Ok(PRICE_DENOMINATOR));
    assert_eq!(to_price(101, 2), Ok(1_010_000_000_000_000_000_000_000));
}

#[test]
fn test_constructors_overflow() {
    assert_eq!(to_percent(u128::MAX, 0), Err(MathError::Overflow));
    assert_eq!(to_percent(1, 39), Err(MathError::Overflow), "10^39 does not fit in u128");
    assert_eq!(to_price(1_000_000_000_000_000, 0), Err(MathError::Overflow));
}

#[test]
fn test_fee_tiers() {
    assert_eq!(from_fee(1), Ok(10_000_000), "Fee input 1 is 0.001%");
    assert_eq!(from_fee(u128::MAX), Err(MathError::Overflow));

    let tiers = fee_tiers();
    assert_eq!(tiers[0], to_percent(1, 4).unwrap());
    assert_eq!(tiers[3], to_percent(3, 3).unwrap());
    assert_eq!(tiers[4], to_percent(1, 2).unwrap());

    let spacings: [i32; 5] = tiers.map(|fee| fee_to_tick_spacing(fee).unwrap());
    assert_eq!(spacings, [1, 5, 10, 30, 100]);
}

#[test]
fn test_fee_to_tick_spacing_out_of_range() {
    assert_eq!(fee_to_tick_spacing(u128::MAX), Err(MathError::InvalidTickSpacing));
}
