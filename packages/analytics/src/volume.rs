use soroban_sdk::Env;
use tidal_math::{checked_add, checked_mul, div_floor, mul_div_floor, to_u128, u256, MathError, MathResult, PRICE_DENOMINATOR};

/// Swap volume denominated in token X
///
/// Token Y volume is converted at the mean of the two snapshot prices:
/// `x + y * 10^24 / (previous * current / 10^24)`.
pub fn get_volume(
    env: &Env,
    volume_x: u64,
    volume_y: u64,
    previous_sqrt_price: u128,
    current_sqrt_price: u128,
) -> MathResult<u128> {
    let price = mul_div_floor(env, previous_sqrt_price, current_sqrt_price, PRICE_DENOMINATOR)?;
    if price == 0 {
        return Err(MathError::ZeroPrice);
    }

    let scaled = checked_mul(env, &u256(env, volume_y as u128), &u256(env, PRICE_DENOMINATOR))?;
    let denominated_y = div_floor(env, &scaled, &u256(env, price))?;
    to_u128(&checked_add(env, &u256(env, volume_x as u128), &denominated_y)?)
}
