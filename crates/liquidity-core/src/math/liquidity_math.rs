//! # Liquidity Math
//!
//! Sizing of concentrated liquidity positions: the maximum liquidity a pair of
//! token budgets can back over a price range, and the inverse token amounts a
//! liquidity amount holds at the current price.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{CoreResult, LiquidityCoreError};
use crate::math::big_int::{mul_div, q96, Rounding};
use crate::math::sqrt_price_math::{get_amount_0_delta, get_amount_1_delta};
use crate::types::Budget;

/// Liquidity backed by `amount0` over `[lower, upper]`
///
/// `L = amount0 * lower * upper / (2^96 * (upper - lower))`
pub fn max_liquidity_for_amount0(
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    amount0: &BigUint,
) -> CoreResult<BigUint> {
    let width = sorted_width(sqrt_lower_x96, sqrt_upper_x96)?;

    let numerator = amount0 * sqrt_lower_x96;
    let denominator = q96() * width;
    mul_div(&numerator, sqrt_upper_x96, &denominator, Rounding::Down)
}

/// Liquidity backed by `amount1` over `[lower, upper]`
///
/// `L = amount1 * 2^96 / (upper - lower)`
pub fn max_liquidity_for_amount1(
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    amount1: &BigUint,
) -> CoreResult<BigUint> {
    let width = sorted_width(sqrt_lower_x96, sqrt_upper_x96)?;
    mul_div(amount1, &q96(), &width, Rounding::Down)
}

/// Maximum liquidity placeable over `[lower, upper]` without exceeding either budget
pub fn max_liquidity_for_amounts(
    sqrt_current_x96: &BigUint,
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    amount0: &Budget,
    amount1: &Budget,
) -> CoreResult<BigUint> {
    sorted_width(sqrt_lower_x96, sqrt_upper_x96)?;

    if sqrt_current_x96 <= sqrt_lower_x96 {
        // Range entirely above the price: only token0 is deposited
        let amount0 = amount0.limit().ok_or(LiquidityCoreError::UnboundedLiquidity)?;
        return max_liquidity_for_amount0(sqrt_lower_x96, sqrt_upper_x96, amount0);
    }

    if sqrt_current_x96 >= sqrt_upper_x96 {
        // Range entirely below the price: only token1 is deposited
        let amount1 = amount1.limit().ok_or(LiquidityCoreError::UnboundedLiquidity)?;
        return max_liquidity_for_amount1(sqrt_lower_x96, sqrt_upper_x96, amount1);
    }

    // Straddling: each limited side gives a candidate, the smaller one binds
    let liquidity0 = amount0
        .limit()
        .map(|amount| max_liquidity_for_amount0(sqrt_current_x96, sqrt_upper_x96, amount))
        .transpose()?;
    let liquidity1 = amount1
        .limit()
        .map(|amount| max_liquidity_for_amount1(sqrt_lower_x96, sqrt_current_x96, amount))
        .transpose()?;

    match (liquidity0, liquidity1) {
        (Some(liquidity0), Some(liquidity1)) => {
            log::trace!(
                "liquidity candidates: token0={} token1={}",
                liquidity0,
                liquidity1
            );
            Ok(liquidity0.min(liquidity1))
        }
        (Some(liquidity0), None) => Ok(liquidity0),
        (None, Some(liquidity1)) => Ok(liquidity1),
        (None, None) => Err(LiquidityCoreError::UnboundedLiquidity),
    }
}

/// Token amounts held by `liquidity` over `[lower, upper]` at the current price
pub fn get_amounts_for_liquidity(
    sqrt_current_x96: &BigUint,
    sqrt_lower_x96: &BigUint,
    sqrt_upper_x96: &BigUint,
    liquidity: &BigUint,
) -> CoreResult<(BigUint, BigUint)> {
    sorted_width(sqrt_lower_x96, sqrt_upper_x96)?;

    let amounts = if sqrt_current_x96 <= sqrt_lower_x96 {
        (
            get_amount_0_delta(sqrt_lower_x96, sqrt_upper_x96, liquidity)?,
            BigUint::zero(),
        )
    } else if sqrt_current_x96 < sqrt_upper_x96 {
        (
            get_amount_0_delta(sqrt_current_x96, sqrt_upper_x96, liquidity)?,
            get_amount_1_delta(sqrt_lower_x96, sqrt_current_x96, liquidity)?,
        )
    } else {
        (
            BigUint::zero(),
            get_amount_1_delta(sqrt_lower_x96, sqrt_upper_x96, liquidity)?,
        )
    };

    Ok(amounts)
}

/// `upper - lower` for a strictly ordered range
fn sorted_width(sqrt_lower_x96: &BigUint, sqrt_upper_x96: &BigUint) -> CoreResult<BigUint> {
    if sqrt_lower_x96 >= sqrt_upper_x96 {
        return Err(LiquidityCoreError::InvalidRange);
    }

    Ok(sqrt_upper_x96 - sqrt_lower_x96)
}
