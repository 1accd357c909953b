//! # Protocol Constants
//! 
//! Fixed-point scales and tick/price bounds of the reference concentrated
//! liquidity AMM.

// ============================================================================
// Fixed-Point Constants
// ============================================================================

/// Number of fractional bits of a sqrt price
pub const RESOLUTION: u32 = 96;

/// Q96 fixed-point scale factor: 2^96
pub const Q96: u128 = 1u128 << RESOLUTION;

/// Sentinel passed by UI callers to mark a token budget as "not a constraint"
pub const MAX_UINT128: u128 = u128::MAX;

// ============================================================================
// Tick Bounds
// ============================================================================

/// Minimum tick that may be passed to `get_sqrt_ratio_at_tick`
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick that may be passed to `get_sqrt_ratio_at_tick`
pub const MAX_TICK: i32 = 887_272;

/// Minimum sqrt price (Q64.96), equal to `get_sqrt_ratio_at_tick(MIN_TICK)`
pub const MIN_SQRT_RATIO: u128 = 4_295_128_739;

/// Maximum sqrt price (Q64.96), equal to `get_sqrt_ratio_at_tick(MAX_TICK)`.
/// Wider than u128, so kept as a decimal string and parsed on use.
pub const MAX_SQRT_RATIO: &str = "1461446703485210103287273052203988822378723970342";

// ============================================================================
// Display Constants
// ============================================================================

/// Decimal places used when rendering locked amounts in the chart tooltip
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 3;
