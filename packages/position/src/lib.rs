// Tidal Position Package
//
// Position snapshots, fee claims and range selection helpers.
// Concentration figures are floating point, so this crate links std.

pub mod concentration;
pub mod error;
pub mod fees;
pub mod manager;
pub mod types;

pub use types::{Position, PositionInitData};
pub use error::PositionError;
pub use fees::{calculate_claim_amount, calculate_tokens_owed};
pub use manager::{get_position_init_data, update_position, validate_position};
pub use concentration::{calculate_concentration, calculate_tick_delta, get_concentration_array};
