use soroban_sdk::Env;
use tidal_tick::Tickmap;
use crate::engine::{simulate_swap, TickSource};
use crate::error::SwapError;
use crate::types::{SimulationResult, SimulationStatus, SwapParameters};

/// Simulate a swap and accept only a clean run
///
/// # Returns
/// The simulation result when it ended `Ok`, the matching `SwapError` otherwise
pub fn quote_swap<T: TickSource>(
    env: &Env,
    params: &SwapParameters,
    tickmap: &Tickmap,
    ticks: &T,
) -> Result<SimulationResult, SwapError> {
    let result = simulate_swap(env, params, tickmap, ticks)?;

    match result.status {
        SimulationStatus::Ok => Ok(result),
        SimulationStatus::WrongLimit => Err(SwapError::WrongLimit),
        SimulationStatus::PriceLimitReached => Err(SwapError::PriceLimitReached),
        SimulationStatus::TickNotFound => Err(SwapError::TickNotFound),
        SimulationStatus::NoGainSwap => Err(SwapError::NoGainSwap),
        SimulationStatus::TooLargeGap => Err(SwapError::TooLargeGap),
        SimulationStatus::LimitReached => Err(SwapError::LimitReached),
    }
}
