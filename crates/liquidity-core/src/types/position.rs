//! # Position Types
//!
//! A liquidity position over a tick range, evaluated against a pool snapshot.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::errors::{CoreResult, LiquidityCoreError};
use crate::math::liquidity_math::{get_amounts_for_liquidity, max_liquidity_for_amounts};
use crate::math::tick_math::get_sqrt_ratio_at_tick;
use crate::types::budget::Budget;
use crate::types::pool::PoolSnapshot;

/// Where the pool price sits relative to a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionState {
    /// All liquidity withdrawn
    Removed,
    /// Price outside `[tick_lower, tick_upper)`; earns no fees
    OutOfRange,
    InRange,
}

/// Liquidity placed over `[tick_lower, tick_upper)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub tick_lower: i32,
    pub tick_upper: i32,
    #[serde(with = "crate::types::serde_str")]
    pub liquidity: BigUint,
}

impl Position {
    /// Create a position, clamping the range to the pool's usable ticks
    pub fn new(
        pool: &PoolSnapshot,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: BigUint,
    ) -> CoreResult<Self> {
        let tick_lower = tick_lower.max(pool.usable_min_tick()?);
        let tick_upper = tick_upper.min(pool.usable_max_tick()?);

        if tick_lower >= tick_upper {
            return Err(LiquidityCoreError::InvalidRange);
        }

        Ok(Self {
            tick_lower,
            tick_upper,
            liquidity,
        })
    }

    /// Size a new position from token budgets at the pool's current price
    pub fn from_amounts(
        pool: &PoolSnapshot,
        tick_lower: i32,
        tick_upper: i32,
        amount0: &Budget,
        amount1: &Budget,
    ) -> CoreResult<Self> {
        let mut position = Self::new(pool, tick_lower, tick_upper, BigUint::zero())?;
        let (sqrt_lower, sqrt_upper) = position.sqrt_bounds()?;

        position.liquidity = max_liquidity_for_amounts(
            &pool.sqrt_ratio_x96,
            &sqrt_lower,
            &sqrt_upper,
            amount0,
            amount1,
        )?;

        log::debug!(
            "sized position [{}, {}) with liquidity {}",
            position.tick_lower,
            position.tick_upper,
            position.liquidity
        );

        Ok(position)
    }

    pub fn state(&self, pool: &PoolSnapshot) -> PositionState {
        if self.liquidity.is_zero() {
            return PositionState::Removed;
        }
        if pool.tick_current < self.tick_lower || pool.tick_current >= self.tick_upper {
            return PositionState::OutOfRange;
        }
        PositionState::InRange
    }

    /// Sqrt prices of the range boundaries
    pub fn sqrt_bounds(&self) -> CoreResult<(BigUint, BigUint)> {
        Ok((
            get_sqrt_ratio_at_tick(self.tick_lower)?,
            get_sqrt_ratio_at_tick(self.tick_upper)?,
        ))
    }

    /// Raw token amounts (token0, token1) held at the pool's current price
    pub fn amounts(&self, pool: &PoolSnapshot) -> CoreResult<(BigUint, BigUint)> {
        let (sqrt_lower, sqrt_upper) = self.sqrt_bounds()?;

        // Tick comparisons decide the side, matching `state`
        let sqrt_current = if pool.tick_current < self.tick_lower {
            sqrt_lower.clone()
        } else if pool.tick_current >= self.tick_upper {
            sqrt_upper.clone()
        } else {
            pool.sqrt_ratio_x96.clone()
        };

        get_amounts_for_liquidity(&sqrt_current, &sqrt_lower, &sqrt_upper, &self.liquidity)
    }

    pub fn amount0(&self, pool: &PoolSnapshot) -> CoreResult<BigUint> {
        Ok(self.amounts(pool)?.0)
    }

    pub fn amount1(&self, pool: &PoolSnapshot) -> CoreResult<BigUint> {
        Ok(self.amounts(pool)?.1)
    }
}
