//! Liquidity depth chart data

pub mod bars;

pub use bars::{calculate_active_tokens_locked, calculate_bar_data, calculate_tokens_locked};
