//! # Mathematical Functions
//! 
//! Pure fixed-point functions over arbitrary-precision integers.

pub mod big_int;
pub mod liquidity_math;
pub mod sqrt_price_math;
pub mod tick_math;

// Re-export commonly used functions
pub use big_int::*;
pub use liquidity_math::*;
pub use sqrt_price_math::*;
pub use tick_math::*;
