//! Decimal-string (de)serialization for big integers.
//!
//! Indexers and the charting front-end exchange liquidity and prices as
//! decimal strings; JSON numbers would lose precision.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(s.trim()).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "crate::types::serde_str")]
        unsigned: BigUint,
        #[serde(with = "crate::types::serde_str")]
        signed: BigInt,
    }

    #[test]
    fn test_decimal_strings() {
        let json = r#"{"unsigned":"1461446703485210103287273052203988822378723970342","signed":"-42"}"#;
        let parsed: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.signed, BigInt::from(-42));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn test_rejects_garbage() {
        let json = r#"{"unsigned":"-1","signed":"0"}"#;
        assert!(serde_json::from_str::<Wrapper>(json).is_err());
    }
}
