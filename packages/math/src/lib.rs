// Tidal Math Package
//
// Fixed-point arithmetic, price/tick conversion and the single swap step.

#![no_std]

pub mod constants;
pub mod decimal;
pub mod error;
pub mod liquidity;
pub mod sqrt_price;
pub mod swap_step;
pub mod tick_math;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::{MathError, MathResult};

// Re-export fixed-point helpers
pub use decimal::{
    checked_add,
    checked_mul,
    div_ceil,
    div_floor,
    div_up,
    fee_tiers,
    fee_to_tick_spacing,
    from_fee,
    mul_div_ceil,
    mul_div_floor,
    sqrt_u128,
    sqrt_u256,
    to_decimal,
    to_percent,
    to_price,
    to_token,
    to_u128,
    u256,
};

// Re-export sqrt price functions
pub use sqrt_price::{
    calculate_min_received_tokens_by_amount_in,
    calculate_price_after_slippage,
    calculate_price_impact,
    calculate_price_sqrt,
    fee_of,
    get_delta_x,
    get_delta_y,
    get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
    get_next_sqrt_price_x_up,
    get_next_sqrt_price_y_down,
};

// Re-export tick utilities
pub use tick_math::{
    align_tick_to_spacing,
    check_tick,
    check_ticks,
    generate_ticks_array,
    get_max_tick,
    get_min_tick,
    get_search_limit,
    get_tick_from_price,
    price_to_tick_in_range,
};

// Re-export liquidity functions
pub use liquidity::{
    get_liquidity_by_x,
    get_liquidity_by_y,
    get_x,
    get_x_from_liquidity,
    get_y,
    SingleTokenLiquidity,
};

pub use swap_step::{compute_swap_step, is_enough_amount_to_push_price, SwapStep};
