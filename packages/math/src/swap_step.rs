// SPDX-License-Identifier: MIT
// Single Swap Step
//
// One step moves the price from `current` toward `target` within a range of
// constant liquidity. Input is rounded up, output down.

use soroban_sdk::Env;
use crate::constants::DENOMINATOR;
use crate::error::{MathError, MathResult};
use crate::sqrt_price::{
    fee_of, get_delta_x, get_delta_y, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};

/// Outcome of one swap step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapStep {
    pub next_price: u128,
    pub amount_in: u64,
    pub amount_out: u64,
    pub fee_amount: u64,
}

/// Compute a single swap step toward `target_sqrt_price`
///
/// # Arguments
/// * `current_sqrt_price` - Price at the start of the step
/// * `target_sqrt_price` - Closest of the next tick and the price limit
/// * `liquidity` - Active liquidity for the whole step
/// * `amount` - Amount still to swap
/// * `by_amount_in` - Whether `amount` is an input or an output
/// * `fee` - Pool fee at 10^12
///
/// # Returns
/// Price reached and the amounts moved; zero liquidity jumps to the target
pub fn compute_swap_step(
    env: &Env,
    current_sqrt_price: u128,
    target_sqrt_price: u128,
    liquidity: u128,
    amount: u64,
    by_amount_in: bool,
    fee: u128,
) -> MathResult<SwapStep> {
    if liquidity == 0 {
        return Ok(SwapStep {
            next_price: target_sqrt_price,
            ..Default::default()
        });
    }

    let x_to_y = current_sqrt_price >= target_sqrt_price;

    let next_price = if by_amount_in {
        let amount_after_fee = amount_after_fee(amount, fee)?;
        let amount_in = if x_to_y {
            get_delta_x(env, target_sqrt_price, current_sqrt_price, liquidity, true)?
        } else {
            get_delta_y(env, current_sqrt_price, target_sqrt_price, liquidity, true)?
        };

        if amount_after_fee >= amount_in {
            target_sqrt_price
        } else {
            get_next_sqrt_price_from_input(env, current_sqrt_price, liquidity, amount_after_fee, x_to_y)?
        }
    } else {
        let amount_out = if x_to_y {
            get_delta_y(env, target_sqrt_price, current_sqrt_price, liquidity, false)?
        } else {
            get_delta_x(env, current_sqrt_price, target_sqrt_price, liquidity, false)?
        };

        if amount >= amount_out {
            target_sqrt_price
        } else {
            get_next_sqrt_price_from_output(env, current_sqrt_price, liquidity, amount, x_to_y)?
        }
    };

    let (amount_in, mut amount_out) = if x_to_y {
        (
            get_delta_x(env, next_price, current_sqrt_price, liquidity, true)?,
            get_delta_y(env, next_price, current_sqrt_price, liquidity, false)?,
        )
    } else {
        (
            get_delta_y(env, current_sqrt_price, next_price, liquidity, true)?,
            get_delta_x(env, current_sqrt_price, next_price, liquidity, false)?,
        )
    };

    if !by_amount_in && amount_out > amount {
        amount_out = amount;
    }

    // a partial step by input keeps everything not swapped as fee
    let fee_amount = if by_amount_in && next_price != target_sqrt_price {
        amount.checked_sub(amount_in).ok_or(MathError::Overflow)?
    } else {
        fee_of(amount_in, fee)?
    };

    Ok(SwapStep {
        next_price,
        amount_in,
        amount_out,
        fee_amount,
    })
}

/// Whether `amount` moves the price at all
///
/// By input the amount is taken after the fee. Zero liquidity always moves,
/// and so does an output larger than the curve holds.
pub fn is_enough_amount_to_push_price(
    env: &Env,
    amount: u64,
    current_sqrt_price: u128,
    liquidity: u128,
    fee: u128,
    by_amount_in: bool,
    x_to_y: bool,
) -> MathResult<bool> {
    if liquidity == 0 {
        return Ok(true);
    }

    let next_price = if by_amount_in {
        let amount_after_fee = amount_after_fee(amount, fee)?;
        get_next_sqrt_price_from_input(env, current_sqrt_price, liquidity, amount_after_fee, x_to_y)?
    } else {
        match get_next_sqrt_price_from_output(env, current_sqrt_price, liquidity, amount, x_to_y) {
            Ok(next_price) => next_price,
            Err(MathError::Overflow) => return Ok(true),
            Err(err) => return Err(err),
        }
    };

    Ok(next_price != current_sqrt_price)
}

#[inline]
fn amount_after_fee(amount: u64, fee: u128) -> MathResult<u64> {
    let rate = DENOMINATOR.checked_sub(fee).ok_or(MathError::Overflow)?;
    Ok(((amount as u128) * rate / DENOMINATOR) as u64)
}
