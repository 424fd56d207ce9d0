use soroban_sdk::{log, Env, Map, Vec};
use tidal_math::{
    calculate_min_received_tokens_by_amount_in, calculate_price_after_slippage,
    calculate_price_impact, compute_swap_step, get_tick_from_price,
    is_enough_amount_to_push_price, MathError, MathResult, MAX_TICK,
};
use tidal_tick::{get_closer_limit, Tick, Tickmap};
use crate::types::{SimulationResult, SimulationStatus, SwapParameters};

// ============================================================
// TICK SOURCE
// ============================================================

/// Prefetched ticks the simulator may cross
///
/// A miss ends the simulation with `TickNotFound`; nothing is fetched lazily.
pub trait TickSource {
    fn get_tick(&self, index: i32) -> Option<Tick>;
}

impl TickSource for Map<i32, Tick> {
    fn get_tick(&self, index: i32) -> Option<Tick> {
        self.get(index)
    }
}

impl<F> TickSource for F
where
    F: Fn(i32) -> Option<Tick>,
{
    fn get_tick(&self, index: i32) -> Option<Tick> {
        self(index)
    }
}

// ============================================================
// SWAP STATE
// ============================================================

/// Working state of a simulation
#[derive(Clone, Debug)]
pub struct SwapState {
    pub sqrt_price: u128,
    pub current_tick: i32,
    pub liquidity: u128,
    pub remaining: u64,
    pub accumulated_in: u64,
    pub accumulated_out: u64,
    pub accumulated_fee: u64,
}

impl SwapState {
    fn record_step(&mut self, amount_in: u64, amount_out: u64, fee_amount: u64) -> MathResult<()> {
        self.accumulated_in = self.accumulated_in.checked_add(amount_in).ok_or(MathError::Overflow)?;
        self.accumulated_out = self.accumulated_out.checked_add(amount_out).ok_or(MathError::Overflow)?;
        self.accumulated_fee = self.accumulated_fee.checked_add(fee_amount).ok_or(MathError::Overflow)?;
        Ok(())
    }

    /// Apply the liquidity change of a crossed tick
    fn cross(&mut self, tick: &Tick) -> MathResult<()> {
        let (change, add) = tick.liquidity_delta(self.current_tick);
        self.liquidity = if add {
            self.liquidity.checked_add(change)
        } else {
            self.liquidity.checked_sub(change)
        }
        .ok_or(MathError::Overflow)?;
        Ok(())
    }
}

// ============================================================
// SIMULATION
// ============================================================

/// Simulate a swap against a pool snapshot
///
/// # Arguments
/// * `env` - Soroban environment, used for wide arithmetic and logs
/// * `params` - Swap parameters with the pool snapshot
/// * `tickmap` - Tickmap snapshot of the pool
/// * `ticks` - Every tick the swap may cross
///
/// # Returns
/// The outcome with its terminal status; arithmetic failures are `Err`
pub fn simulate_swap<T: TickSource>(
    env: &Env,
    params: &SwapParameters,
    tickmap: &Tickmap,
    ticks: &T,
) -> MathResult<SimulationResult> {
    let pool = &params.pool;
    let x_to_y = params.x_to_y;
    let by_amount_in = params.by_amount_in;

    let tick_spacing = i32::try_from(pool.tick_spacing).map_err(|_| MathError::InvalidTickSpacing)?;
    if tick_spacing == 0 {
        return Err(MathError::InvalidTickSpacing);
    }

    let price_limit = calculate_price_after_slippage(env, params.price_limit, params.slippage, !x_to_y)?;

    let limit_on_trade_side = if x_to_y {
        pool.sqrt_price >= price_limit
    } else {
        pool.sqrt_price <= price_limit
    };
    if !limit_on_trade_side {
        log!(env, "simulation: wrong limit", pool.sqrt_price, price_limit);
        return Ok(SimulationResult::untouched(env, SimulationStatus::WrongLimit, pool.sqrt_price));
    }

    let mut state = SwapState {
        sqrt_price: pool.sqrt_price,
        current_tick: pool.current_tick_index,
        liquidity: pool.liquidity,
        remaining: params.swap_amount,
        accumulated_in: 0,
        accumulated_out: 0,
        accumulated_fee: 0,
    };
    let mut status = SimulationStatus::Ok;
    let mut previous_tick = MAX_TICK + 1;
    let mut amount_per_tick: Vec<u64> = Vec::new(env);
    let mut segment: u64 = 0;

    while state.remaining > 0 {
        let closer = get_closer_limit(price_limit, x_to_y, state.current_tick, tick_spacing, tickmap)?;

        let step = compute_swap_step(
            env,
            state.sqrt_price,
            closer.swap_limit,
            state.liquidity,
            state.remaining,
            by_amount_in,
            pool.fee,
        )?;
        state.record_step(step.amount_in, step.amount_out, step.fee_amount)?;

        let amount_diff = if by_amount_in {
            step.amount_in.checked_add(step.fee_amount).ok_or(MathError::Overflow)?
        } else {
            step.amount_out
        };
        state.remaining = state.remaining.checked_sub(amount_diff).ok_or(MathError::Overflow)?;
        state.sqrt_price = step.next_price;

        if state.sqrt_price == price_limit && state.remaining > 0 {
            status = SimulationStatus::PriceLimitReached;
            break;
        }

        let crossed_tick = match closer.limiting_tick {
            Some(index) if state.sqrt_price == closer.swap_limit => Some(index),
            _ => None,
        };

        if let Some(index) = crossed_tick {
            let Some(tick) = ticks.get_tick(index) else {
                status = SimulationStatus::TickNotFound;
                break;
            };

            let enough = is_enough_amount_to_push_price(
                env,
                state.remaining,
                state.sqrt_price,
                state.liquidity,
                pool.fee,
                by_amount_in,
                x_to_y,
            )?;

            if !x_to_y || enough {
                state.cross(&tick)?;
                log!(env, "simulation: crossed tick", index, state.liquidity);
            } else if state.remaining != 0 {
                // too little left to move past the tick; the pool keeps it
                if by_amount_in {
                    state.accumulated_in = state
                        .accumulated_in
                        .checked_add(state.remaining)
                        .ok_or(MathError::Overflow)?;
                }
                log!(env, "simulation: remainder kept at tick", index, state.remaining);
                state.remaining = 0;
            }

            state.current_tick = if x_to_y && enough { index - tick_spacing } else { index };
        } else {
            state.current_tick = get_tick_from_price(state.current_tick, tick_spacing, state.sqrt_price, x_to_y)?;
        }

        segment = segment.checked_add(amount_diff).ok_or(MathError::Overflow)?;
        if crossed_tick.is_some() || state.remaining == 0 {
            amount_per_tick.push_back(segment);
            segment = 0;
        }

        if crossed_tick.is_none() && state.liquidity == 0 {
            status = SimulationStatus::TooLargeGap;
            break;
        }

        if state.current_tick == previous_tick && state.remaining != 0 {
            status = SimulationStatus::LimitReached;
            break;
        }
        previous_tick = state.current_tick;
    }

    if state.accumulated_out == 0 && status == SimulationStatus::Ok {
        status = SimulationStatus::NoGainSwap;
    }
    if status != SimulationStatus::Ok {
        log!(env, "simulation: ended", status, state.accumulated_in, state.accumulated_out);
    }

    let price_impact = calculate_price_impact(env, pool.sqrt_price, state.sqrt_price)?;

    let min_received = if by_amount_in {
        let ending_price = calculate_price_after_slippage(env, state.sqrt_price, params.slippage, !x_to_y)?;
        calculate_min_received_tokens_by_amount_in(env, ending_price, x_to_y, state.accumulated_in, pool.fee)?
    } else {
        state.accumulated_out
    };

    Ok(SimulationResult {
        status,
        amount_per_tick,
        accumulated_amount_in: state.accumulated_in,
        accumulated_amount_out: state.accumulated_out,
        accumulated_fee: state.accumulated_fee,
        price_after_swap: state.sqrt_price,
        price_impact,
        min_received,
    })
}
