//! # Token Budgets
//! 
//! Input to liquidity sizing: how much of a token the caller is willing to
//! deposit, or no limit at all.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_UINT128;

/// Amount of one token available to a new position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    /// At most this many raw token units
    Limited(#[serde(with = "crate::types::serde_str")] BigUint),
    /// This side does not constrain the position
    Unbounded,
}

impl Budget {
    /// Map a raw amount to a budget, treating the `MAX_UINT128` sentinel used by
    /// UI callers as `Unbounded`
    pub fn from_raw(amount: BigUint) -> Self {
        if amount >= BigUint::from(MAX_UINT128) {
            Budget::Unbounded
        } else {
            Budget::Limited(amount)
        }
    }
    
    /// The limiting amount, if any
    pub fn limit(&self) -> Option<&BigUint> {
        match self {
            Budget::Limited(amount) => Some(amount),
            Budget::Unbounded => None,
        }
    }
    
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Budget::Unbounded)
    }
}

impl From<BigUint> for Budget {
    fn from(amount: BigUint) -> Self {
        Budget::Limited(amount)
    }
}

impl From<u128> for Budget {
    fn from(amount: u128) -> Self {
        Budget::from_raw(BigUint::from(amount))
    }
}

impl From<Option<BigUint>> for Budget {
    fn from(amount: Option<BigUint>) -> Self {
        amount.map_or(Budget::Unbounded, Budget::Limited)
    }
}
