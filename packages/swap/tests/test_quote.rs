use tidal_swap::*;
use tidal_tick::{Tick, Tickmap};
use tidal_math::{calculate_price_sqrt, MathError, LIQUIDITY_DENOMINATOR, PRICE_DENOMINATOR};
use soroban_sdk::{Env, Map};

fn single_range(env: &Env) -> (Tickmap, Map<i32, Tick>) {
    let liquidity = 1_000_000 * LIQUIDITY_DENOMINATOR;
    let mut ticks = Map::new(env);
    let mut tickmap = Tickmap::default();
    for (index, sign) in [(-100, true), (100, false)] {
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

fn swap(x_to_y: bool, swap_amount: u64, price_limit: u128) -> SwapParameters {
    SwapParameters {
        x_to_y,
        swap_amount,
        by_amount_in: true,
        slippage: 0,
        price_limit,
        pool: PoolSnapshot {
            current_tick_index: 0,
            tick_spacing: 10,
            liquidity: 1_000_000 * LIQUIDITY_DENOMINATOR,
            sqrt_price: PRICE_DENOMINATOR,
            fee: 600_000_000,
            ..Default::default()
        },
    }
}

#[test]
fn test_quote_returns_clean_simulation() {
    let env = Env::default();
    let (tickmap, ticks) = single_range(&env);
    let params = swap(true, 1_000, calculate_price_sqrt(-100).unwrap());

    let quote = quote_swap(&env, &params, &tickmap, &ticks).unwrap();
    let simulation = simulate_swap(&env, &params, &tickmap, &ticks).unwrap();

    assert_eq!(quote, simulation, "Quote must not alter a clean simulation");
    assert_eq!(quote.status, SimulationStatus::Ok);
    assert!(quote.accumulated_amount_out > 0);
    assert!(quote.price_after_swap < PRICE_DENOMINATOR, "Selling x lowers the price");
}

#[test]
fn test_quote_wrong_limit() {
    let env = Env::default();
    let (tickmap, ticks) = single_range(&env);
    let params = swap(false, 1_000, calculate_price_sqrt(-100).unwrap());

    assert_eq!(quote_swap(&env, &params, &tickmap, &ticks), Err(SwapError::WrongLimit));
}

#[test]
fn test_quote_price_limit_reached() {
    let env = Env::default();
    let (tickmap, ticks) = single_range(&env);
    let params = swap(true, 1_000_000, calculate_price_sqrt(-20).unwrap());

    assert_eq!(quote_swap(&env, &params, &tickmap, &ticks), Err(SwapError::PriceLimitReached));
}

#[test]
fn test_quote_tick_not_found() {
    let env = Env::default();
    let (tickmap, _) = single_range(&env);
    let empty = |_: i32| -> Option<Tick> { None };
    let params = swap(true, 1_000_000, calculate_price_sqrt(-1000).unwrap());

    assert_eq!(quote_swap(&env, &params, &tickmap, &empty), Err(SwapError::TickNotFound));
}

#[test]
fn test_quote_no_gain_swap() {
    let env = Env::default();
    let (tickmap, ticks) = single_range(&env);
    let params = swap(true, 1, calculate_price_sqrt(-100).unwrap());

    assert_eq!(quote_swap(&env, &params, &tickmap, &ticks), Err(SwapError::NoGainSwap));
}

#[test]
fn test_quote_zero_spacing_is_math_failure() {
    let env = Env::default();
    let (tickmap, ticks) = single_range(&env);
    let mut params = swap(true, 1_000, calculate_price_sqrt(-100).unwrap());
    params.pool.tick_spacing = 0;

    assert_eq!(
        simulate_swap(&env, &params, &tickmap, &ticks),
        Err(MathError::InvalidTickSpacing)
    );
    assert_eq!(quote_swap(&env, &params, &tickmap, &ticks), Err(SwapError::MathFailure));
}

#[test]
fn test_swap_error_codes() {
    assert_eq!(SwapError::WrongLimit as u32, 500);
    assert_eq!(SwapError::LimitReached as u32, 505);
    assert_eq!(SwapError::MathFailure as u32, 510);
    assert_eq!(SwapError::from(MathError::Overflow), SwapError::MathFailure);
}
