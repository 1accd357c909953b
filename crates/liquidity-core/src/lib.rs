//! # Liquidity Core - Concentrated Liquidity Range Math
//! 
//! Pure, synchronous math behind a concentrated-liquidity provisioning UI.
//! It provides:
//! 
//! - Tick <-> sqrt price conversion (Q64.96, bit-exact with the on-chain library)
//! - Token amounts locked between two sqrt prices
//! - Maximum liquidity obtainable from token budgets
//! - Liquidity depth bars around the active tick for charting
//! 
//! All numeric values are arbitrary-precision integers; nothing in this crate
//! performs I/O or holds shared state.

pub mod chart;
pub mod constants;
pub mod errors;
pub mod format;
pub mod math;
pub mod types;

// Re-export commonly used items
pub use chart::{calculate_bar_data, calculate_active_tokens_locked, calculate_tokens_locked};
pub use constants::*;
pub use errors::{LiquidityCoreError, CoreResult};
pub use types::*;
