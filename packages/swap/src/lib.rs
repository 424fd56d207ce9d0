#![no_std]

pub mod engine;
pub mod error;
pub mod quote;
pub mod types;

// Re-export types
pub use types::{PoolSnapshot, SimulationResult, SimulationStatus, SwapParameters};
pub use error::SwapError;

// Re-export engine functions and types
pub use engine::{simulate_swap, SwapState, TickSource};
pub use quote::quote_swap;
