//! # Amount Formatting
//!
//! Conversion between raw integer token amounts and decimal strings in whole
//! token units.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{CoreResult, LiquidityCoreError};

/// Render `amount` (raw units) with `decimals` token decimals, truncated to
/// `decimal_places` fractional digits with trailing zeros stripped
pub fn format_units(amount: &BigUint, decimals: u8, decimal_places: u32) -> String {
    let scale = BigUint::from(10u32).pow(u32::from(decimals));
    let whole = amount / &scale;
    let fraction = amount % &scale;

    let places = decimal_places.min(u32::from(decimals)) as usize;
    if places == 0 || fraction.is_zero() {
        return whole.to_string();
    }

    // Left-pad the fraction to the full decimal width, then truncate
    let digits = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let truncated = digits[..places].trim_end_matches('0');

    if truncated.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, truncated)
    }
}

/// Parse a whole-unit decimal string (e.g. `"1.5"`) into raw units
pub fn parse_units(value: &str, decimals: u8) -> CoreResult<BigUint> {
    let invalid = || LiquidityCoreError::InvalidBigInt(value.to_string());

    let trimmed = value.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    if fraction.len() > decimals as usize {
        return Err(invalid());
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let digits = format!("{}{:0<width$}", whole, fraction, width = decimals as usize);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }

    digits.parse::<BigUint>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_units() {
        let amount = BigUint::from(1_234_567u32);
        assert_eq!(format_units(&amount, 6, 3), "1.234");
        assert_eq!(format_units(&amount, 6, 6), "1.234567");
        assert_eq!(format_units(&amount, 0, 3), "1234567");
        assert_eq!(format_units(&BigUint::from(1_000_000u32), 6, 3), "1");
        assert_eq!(format_units(&BigUint::from(1_000_500u32), 6, 3), "1");
        assert_eq!(format_units(&BigUint::from(50u32), 18, 3), "0");
        assert_eq!(format_units(&BigUint::from(1_200u32), 4, 3), "0.12");
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("1.5", 6).unwrap(), BigUint::from(1_500_000u32));
        assert_eq!(parse_units("2", 2).unwrap(), BigUint::from(200u32));
        assert_eq!(parse_units(".25", 2).unwrap(), BigUint::from(25u32));
        assert_eq!(parse_units("0.0", 6).unwrap(), BigUint::zero());
        assert!(parse_units("1.234", 2).is_err());
        assert!(parse_units("-1", 6).is_err());
        assert!(parse_units("", 6).is_err());
        assert!(parse_units("1e3", 6).is_err());
    }
}
