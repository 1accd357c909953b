//! # Bar Types
//! 
//! Renderable liquidity depth bars. Created once per chart render and never
//! mutated afterwards.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::format::format_units;
use crate::types::pool::PoolSnapshot;

/// One liquidity bar covering `[tick, tick + tick_spacing)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatum {
    pub tick: i32,
    /// Active liquidity inside the bucket
    #[serde(with = "crate::types::serde_str")]
    pub liquidity: BigUint,
    /// Raw token0 units locked in the bucket (zero at or below the active tick)
    #[serde(with = "crate::types::serde_str")]
    pub amount0_locked: BigUint,
    /// Raw token1 units locked in the bucket (zero above the active tick)
    #[serde(with = "crate::types::serde_str")]
    pub amount1_locked: BigUint,
    /// Liquidity drawn on the token0 side of the chart
    #[serde(with = "crate::types::serde_str")]
    pub display_liquidity0: BigUint,
    /// Liquidity drawn on the token1 side of the chart
    #[serde(with = "crate::types::serde_str")]
    pub display_liquidity1: BigUint,
}

impl BarDatum {
    /// Render locked amounts in whole-token units with the pool's decimals
    pub fn formatted(&self, pool: &PoolSnapshot, decimal_places: u32) -> FormattedBar {
        FormattedBar {
            tick: self.tick,
            liquidity: self.liquidity.to_string(),
            amount0_locked: format_units(
                &self.amount0_locked,
                pool.token0.decimals,
                decimal_places,
            ),
            amount1_locked: format_units(
                &self.amount1_locked,
                pool.token1.decimals,
                decimal_places,
            ),
            display_liquidity0: self.display_liquidity0.to_string(),
            display_liquidity1: self.display_liquidity1.to_string(),
        }
    }
}

/// Bar with amounts rendered for a tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedBar {
    pub tick: i32,
    pub liquidity: String,
    pub amount0_locked: String,
    pub amount1_locked: String,
    pub display_liquidity0: String,
    pub display_liquidity1: String,
}

/// Output of the bar aggregator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityBars {
    pub bars: Vec<BarDatum>,
    /// Index into `bars` of the bucket containing the current price
    pub active_tick_index: usize,
}

impl LiquidityBars {
    pub fn active_bar(&self) -> Option<&BarDatum> {
        self.bars.get(self.active_tick_index)
    }
    
    /// Reverse bar order so price decreases left to right
    pub fn reversed(mut self) -> Self {
        if self.bars.is_empty() {
            return self;
        }
        self.bars.reverse();
        self.active_tick_index = self.bars.len() - self.active_tick_index - 1;
        self
    }
    
    pub fn formatted(&self, pool: &PoolSnapshot, decimal_places: u32) -> Vec<FormattedBar> {
        self.bars
            .iter()
            .map(|bar| bar.formatted(pool, decimal_places))
            .collect()
    }
}
