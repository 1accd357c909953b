//! Big integer operations for high-precision math
//!
//! Thin helpers over `num-bigint` for the Q64.96 fixed-point calculations:
//! mul_div with explicit rounding, the shared fixed-point constants, and
//! decimal-string parsing of values supplied by indexers.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SQRT_RATIO, MIN_SQRT_RATIO, Q96, RESOLUTION};
use crate::errors::{CoreResult, LiquidityCoreError};

/// Rounding mode for division operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rounding {
    /// Round down (towards zero)
    #[default]
    Down,
    /// Round up (away from zero)
    Up,
}

/// 2^96 as a big integer
pub fn q96() -> BigUint {
    BigUint::from(Q96)
}

/// Smallest valid sqrt price
pub fn min_sqrt_ratio() -> BigUint {
    BigUint::from(MIN_SQRT_RATIO)
}

/// Largest sqrt price reachable from a valid tick
pub fn max_sqrt_ratio() -> BigUint {
    // The literal is a checked constant
    MAX_SQRT_RATIO
        .parse::<BigUint>()
        .unwrap_or_else(|_| BigUint::one() << 160u32)
}

/// Multiply two values and divide by a third with specified rounding
/// result = (a * b) / denominator
pub fn mul_div(
    a: &BigUint,
    b: &BigUint,
    denominator: &BigUint,
    rounding: Rounding,
) -> CoreResult<BigUint> {
    if denominator.is_zero() {
        return Err(LiquidityCoreError::DivisionByZero);
    }

    let product = a * b;
    div_rounding(&product, denominator, rounding)
}

/// Divide with specified rounding
pub fn div_rounding(
    numerator: &BigUint,
    denominator: &BigUint,
    rounding: Rounding,
) -> CoreResult<BigUint> {
    if denominator.is_zero() {
        return Err(LiquidityCoreError::DivisionByZero);
    }

    let quotient = numerator / denominator;
    if rounding == Rounding::Up && !(numerator % denominator).is_zero() {
        return Ok(quotient + 1u32);
    }

    Ok(quotient)
}

/// Shift a value into Q64.96 (`value << 96`)
pub fn to_x96(value: &BigUint) -> BigUint {
    value << RESOLUTION
}

/// Parse an unsigned decimal string, as delivered by indexers
pub fn parse_biguint(value: &str) -> CoreResult<BigUint> {
    value
        .trim()
        .parse::<BigUint>()
        .map_err(|_| LiquidityCoreError::InvalidBigInt(value.to_string()))
}

/// Parse a signed decimal string, as delivered by indexers
pub fn parse_bigint(value: &str) -> CoreResult<BigInt> {
    value
        .trim()
        .parse::<BigInt>()
        .map_err(|_| LiquidityCoreError::InvalidBigInt(value.to_string()))
}

/// Convert a signed value to unsigned, failing on negatives
pub fn to_biguint(value: &BigInt) -> Option<BigUint> {
    match value.sign() {
        Sign::Minus => None,
        _ => Some(value.magnitude().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_rounding() {
        let ten = BigUint::from(10u32);
        let three = BigUint::from(3u32);
        let four = BigUint::from(4u32);

        // 10 * 3 / 4 = 7.5
        assert_eq!(mul_div(&ten, &three, &four, Rounding::Down).unwrap(), BigUint::from(7u32));
        assert_eq!(mul_div(&ten, &three, &four, Rounding::Up).unwrap(), BigUint::from(8u32));

        // Exact division is not bumped
        let five = BigUint::from(5u32);
        assert_eq!(mul_div(&ten, &four, &five, Rounding::Up).unwrap(), BigUint::from(8u32));
    }

    #[test]
    fn test_mul_div_past_256_bits() {
        let a = BigUint::one() << 200u32;
        let b = BigUint::one() << 200u32;
        let d = BigUint::one() << 300u32;
        assert_eq!(mul_div(&a, &b, &d, Rounding::Down).unwrap(), BigUint::one() << 100u32);
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        let one = BigUint::one();
        assert_eq!(
            mul_div(&one, &one, &BigUint::zero(), Rounding::Down),
            Err(LiquidityCoreError::DivisionByZero)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_biguint(" 1000 ").unwrap(), BigUint::from(1000u32));
        assert_eq!(parse_bigint("-1000").unwrap(), BigInt::from(-1000));
        assert!(parse_biguint("-1").is_err());
        assert!(parse_bigint("0x10").is_err());
    }

    #[test]
    fn test_sqrt_ratio_bounds() {
        assert!(min_sqrt_ratio() < q96());
        assert!(max_sqrt_ratio() > q96());
        assert_eq!(max_sqrt_ratio().to_string(), MAX_SQRT_RATIO);
    }
}
