//! # Pool Types
//! 
//! Read-only pool snapshot as supplied by the data-fetching layer.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::errors::{CoreResult, LiquidityCoreError};
use crate::math::tick_math::{
    align_tick_down, get_sqrt_ratio_at_tick, is_sqrt_price_valid, is_tick_valid, usable_max_tick,
    usable_min_tick,
};

/// ERC20-style token metadata needed to render amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// Pool state at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    /// Tick containing the current price
    pub tick_current: i32,
    /// Spacing between initializable ticks
    pub tick_spacing: i32,
    /// Current sqrt price (Q64.96)
    #[serde(with = "crate::types::serde_str")]
    pub sqrt_ratio_x96: BigUint,
    pub token0: Token,
    pub token1: Token,
}

impl PoolSnapshot {
    /// Build a snapshot whose sqrt price sits exactly on `tick_current`
    pub fn at_tick(
        tick_current: i32,
        tick_spacing: i32,
        token0: Token,
        token1: Token,
    ) -> CoreResult<Self> {
        Ok(Self {
            tick_current,
            tick_spacing,
            sqrt_ratio_x96: get_sqrt_ratio_at_tick(tick_current)?,
            token0,
            token1,
        })
    }
    
    /// Validate the snapshot's scalar fields
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_spacing <= 0 {
            return Err(LiquidityCoreError::InvalidTickSpacing(self.tick_spacing));
        }
        
        if !is_tick_valid(self.tick_current) {
            return Err(LiquidityCoreError::InvalidTick(self.tick_current));
        }
        
        if !is_sqrt_price_valid(&self.sqrt_ratio_x96) {
            return Err(LiquidityCoreError::invalid_sqrt_price(&self.sqrt_ratio_x96));
        }
        
        Ok(())
    }
    
    /// Spacing-aligned tick of the bucket containing the current price
    pub fn tick_active(&self) -> CoreResult<i32> {
        align_tick_down(self.tick_current, self.tick_spacing)
    }
    
    /// Lowest tick usable as a position boundary in this pool
    pub fn usable_min_tick(&self) -> CoreResult<i32> {
        usable_min_tick(self.tick_spacing)
    }
    
    /// Highest tick usable as a position boundary in this pool
    pub fn usable_max_tick(&self) -> CoreResult<i32> {
        usable_max_tick(self.tick_spacing)
    }
}
