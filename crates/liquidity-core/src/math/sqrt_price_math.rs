//! # Sqrt Price Math
//!
//! Token amounts implied by a liquidity amount between two sqrt prices.
//! Bounds must be supplied sorted; they are never swapped silently.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{CoreResult, LiquidityCoreError};
use crate::math::big_int::{div_rounding, mul_div, q96, to_x96, Rounding};

/// Calculate amount0 delta, rounded down
///
/// `amount0 = L * 2^96 * (upper - lower) / (upper * lower)`
pub fn get_amount_0_delta(
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    liquidity: &BigUint,
) -> CoreResult<BigUint> {
    get_amount_0_delta_rounding(sqrt_lower_x96, sqrt_upper_x96, liquidity, Rounding::Down)
}

/// Calculate amount0 delta with explicit rounding
pub fn get_amount_0_delta_rounding(
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    liquidity: &BigUint,
    rounding: Rounding,
) -> CoreResult<BigUint> {
    let width = range_width(sqrt_lower_x96, sqrt_upper_x96)?;
    if width.is_zero() {
        return Ok(BigUint::zero());
    }
    if sqrt_lower_x96.is_zero() {
        return Err(LiquidityCoreError::invalid_sqrt_price(sqrt_lower_x96));
    }

    // Divide by upper first, then lower, mirroring the on-chain evaluation order
    let numerator1 = to_x96(liquidity);
    let per_upper = mul_div(&numerator1, &width, sqrt_upper_x96, rounding)?;
    div_rounding(&per_upper, sqrt_lower_x96, rounding)
}

/// Calculate amount1 delta, rounded down
///
/// `amount1 = L * (upper - lower) / 2^96`
pub fn get_amount_1_delta(
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    liquidity: &BigUint,
) -> CoreResult<BigUint> {
    get_amount_1_delta_rounding(sqrt_lower_x96, sqrt_upper_x96, liquidity, Rounding::Down)
}

/// Calculate amount1 delta with explicit rounding
pub fn get_amount_1_delta_rounding(
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    liquidity: &BigUint,
    rounding: Rounding,
) -> CoreResult<BigUint> {
    let width = range_width(sqrt_lower_x96, sqrt_upper_x96)?;
    mul_div(liquidity, &width, &q96(), rounding)
}

/// `upper - lower`, failing when the bounds are out of order
fn range_width(sqrt_lower_x96: &BigUint, sqrt_upper_x96: &BigUint) -> CoreResult<BigUint> {
    if sqrt_upper_x96 < sqrt_lower_x96 {
        return Err(LiquidityCoreError::NegativeRange);
    }

    Ok(sqrt_upper_x96 - sqrt_lower_x96)
}
