//! # Tick Types
//! 
//! Sparse per-tick liquidity deltas as recorded by the pool's tick bitmap.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::errors::CoreResult;
use crate::math::big_int::parse_bigint;

/// One initialized tick: the liquidity delta applied when price crosses it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickDatum {
    pub tick: i32,
    /// Signed delta added to active liquidity when crossing upwards
    #[serde(with = "crate::types::serde_str")]
    pub liquidity_net: BigInt,
}

impl TickDatum {
    pub fn new(tick: i32, liquidity_net: impl Into<BigInt>) -> Self {
        Self {
            tick,
            liquidity_net: liquidity_net.into(),
        }
    }
    
    /// Build from an indexer row where `liquidityNet` is a signed decimal string
    pub fn from_decimal(tick: i32, liquidity_net: &str) -> CoreResult<Self> {
        Ok(Self {
            tick,
            liquidity_net: parse_bigint(liquidity_net)?,
        })
    }
}
