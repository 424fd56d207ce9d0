#![no_std]

pub mod bitmap;
pub mod error;
pub mod fee_growth;
pub mod search;
pub mod types;

pub use bitmap::{tick_to_position, Tickmap};
pub use error::TickmapError;
pub use fee_growth::{
    calculate_fee_growth_inside, calculate_seconds_per_liquidity_global,
    calculate_seconds_per_liquidity_inside,
};
pub use search::{find_closest_ticks, get_closer_limit, CloserLimit, SearchDirection};
pub use types::Tick;

// Re-export from math
pub use tidal_math::{align_tick_to_spacing, get_search_limit};
