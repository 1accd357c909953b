//! # Core Error Types
//! 
//! Every failure the range math can report. Errors are returned, never
//! retried: the computation is deterministic.

use thiserror::Error;

/// Errors produced by tick math, amount math, sizing and bar aggregation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiquidityCoreError {
    // ========================================================================
    // Tick and Price Errors
    // ========================================================================
    
    #[error("Invalid tick: {0}")]
    InvalidTick(i32),
    
    #[error("Invalid sqrt price: {0}")]
    InvalidSqrtPrice(String),
    
    #[error("Invalid tick spacing: {0}")]
    InvalidTickSpacing(i32),
    
    // ========================================================================
    // Range Errors
    // ========================================================================
    
    #[error("Negative price range: upper sqrt price is below lower sqrt price")]
    NegativeRange,
    
    #[error("Invalid price range: lower bound must be strictly below upper bound")]
    InvalidRange,
    
    // ========================================================================
    // Liquidity Errors
    // ========================================================================
    
    #[error("Every binding token budget is unbounded")]
    UnboundedLiquidity,
    
    #[error("Running liquidity became negative at tick {0}")]
    NegativeLiquidity(i32),
    
    // ========================================================================
    // Tick Set Errors
    // ========================================================================
    
    #[error("Tick set is empty")]
    EmptyTickSet,
    
    #[error("No initialized tick at or below active tick {0}")]
    NoActiveBucket(i32),
    
    #[error("Inconsistent pool state: {0}")]
    InconsistentPoolState(String),
    
    // ========================================================================
    // General Errors
    // ========================================================================
    
    #[error("Division by zero")]
    DivisionByZero,
    
    #[error("Invalid integer literal: {0}")]
    InvalidBigInt(String),
}

/// Result type using core errors
pub type CoreResult<T> = Result<T, LiquidityCoreError>;

// Helper functions for creating specific errors
impl LiquidityCoreError {
    /// Create an invalid sqrt price error from any displayable value
    pub fn invalid_sqrt_price(value: impl std::fmt::Display) -> Self {
        Self::InvalidSqrtPrice(value.to_string())
    }
    
    /// Create an inconsistent pool state error with reason
    pub fn inconsistent_pool(reason: impl Into<String>) -> Self {
        Self::InconsistentPoolState(reason.into())
    }
}
