//! # Tick Math
//!
//! Conversions between ticks and sqrt prices using Q64.96 fixed-point precision.
//! The forward conversion reproduces the on-chain TickMath library bit for bit:
//! the same Q128 magic constants, truncating shifts and final round-up. It is
//! evaluated in arbitrary precision, which is exact because every intermediate
//! product of the on-chain version already fits in 256 bits.

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::{MAX_TICK, MIN_TICK};
use crate::errors::{CoreResult, LiquidityCoreError};
use crate::math::big_int::{max_sqrt_ratio, min_sqrt_ratio};

/// Q128 multipliers for bits 1..19 of |tick|: 2^128 / 1.0001^(2^(i-1))
const MAGIC_SQRT_1_0001_POW_2: [u128; 19] = [
    0xfff97272373d413259a46990580e213a,  // 2^1
    0xfff2e50f5f656932ef12357cf3c7fdcc,  // 2^2
    0xffe5caca7e10e4e61c3624eaa0941cd0,  // 2^3
    0xffcb9843d60f6159c9db58835c926644,  // 2^4
    0xff973b41fa98c081472e6896dfb254c0,  // 2^5
    0xff2ea16466c96a3843ec78b326b52861,  // 2^6
    0xfe5dee046a99a2a811c461f1969c3053,  // 2^7
    0xfcbe86c7900a88aedcffc83b479aa3a4,  // 2^8
    0xf987a7253ac413176f2b074cf7815e54,  // 2^9
    0xf3392b0822b70005940c7a398e4b70f3,  // 2^10
    0xe7159475a2c29b7443b29c7fa6e889d9,  // 2^11
    0xd097f3bdfd2022b8845ad8f792aa5825,  // 2^12
    0xa9f746462d870fdf8a65dc1f90e061e5,  // 2^13
    0x70d869a156d2a1b890bb3df62baf32f7,  // 2^14
    0x31be135f97d08fd981231505542fcfa6,  // 2^15
    0x9aa508b5b7a84e1c677de54f3e99bc9,   // 2^16
    0x5d6af8dedb81196699c329225ee604,    // 2^17
    0x2216e584f5fa1ea926041bedfe98,      // 2^18
    0x48a170391f7dc42444e8fa2,           // 2^19
];

/// 2^128 / sqrt(1.0001), applied when bit 0 of |tick| is set
const MAGIC_SQRT_1_0001: u128 = 0xfffcb933bd6fad37aa2d162d1a594001;

/// Get sqrt price (Q64.96) from tick
pub fn get_sqrt_ratio_at_tick(tick: i32) -> CoreResult<BigUint> {
    // Validate tick range
    if !is_tick_valid(tick) {
        return Err(LiquidityCoreError::InvalidTick(tick));
    }

    let abs_tick = tick.unsigned_abs();
    let mut ratio = if abs_tick & 0x1 != 0 {
        BigUint::from(MAGIC_SQRT_1_0001)
    } else {
        BigUint::one() << 128u32
    };

    // Binary decomposition of the remaining bits (MAX_TICK < 2^20)
    for (i, magic) in MAGIC_SQRT_1_0001_POW_2.iter().enumerate() {
        if abs_tick & (1 << (i + 1)) != 0 {
            ratio = (ratio * *magic) >> 128u32;
        }
    }

    // Constants describe negative ticks; invert against uint256 max for positive ones
    if tick > 0 {
        let u256_max = (BigUint::one() << 256u32) - 1u32;
        ratio = u256_max / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so that get_tick_at_sqrt_ratio inverts exactly
    Ok((ratio + 0xffff_ffffu32) >> 32u32)
}

/// Get the greatest tick whose sqrt price is at most `sqrt_price_x96`
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: &BigUint) -> CoreResult<i32> {
    // Validate price range
    if !is_sqrt_price_valid(sqrt_price_x96) {
        return Err(LiquidityCoreError::invalid_sqrt_price(sqrt_price_x96));
    }

    // Binary search over the exact forward function: invariant
    // ratio(low) <= sqrt_price_x96 < ratio(high + 1)
    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low < high {
        let mid = low + (high - low + 1) / 2;
        let mid_sqrt_price = get_sqrt_ratio_at_tick(mid)?;

        if mid_sqrt_price <= *sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Clamp a tick into `[MIN_TICK, MAX_TICK]`
pub fn bound(tick: i32) -> i32 {
    tick.clamp(MIN_TICK, MAX_TICK)
}

/// Check if a tick is within the supported range
pub fn is_tick_valid(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

/// Check if a sqrt price lies in `[MIN_SQRT_RATIO, MAX_SQRT_RATIO)`
pub fn is_sqrt_price_valid(sqrt_price_x96: &BigUint) -> bool {
    *sqrt_price_x96 >= min_sqrt_ratio() && *sqrt_price_x96 < max_sqrt_ratio()
}

/// Round a tick down to a multiple of `tick_spacing` (towards negative infinity)
pub fn align_tick_down(tick: i32, tick_spacing: i32) -> CoreResult<i32> {
    if tick_spacing <= 0 {
        return Err(LiquidityCoreError::InvalidTickSpacing(tick_spacing));
    }

    Ok(tick.div_euclid(tick_spacing) * tick_spacing)
}

/// Round a tick to the nearest multiple of `tick_spacing` that is still a valid tick
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> CoreResult<i32> {
    if tick_spacing <= 0 {
        return Err(LiquidityCoreError::InvalidTickSpacing(tick_spacing));
    }
    if !is_tick_valid(tick) {
        return Err(LiquidityCoreError::InvalidTick(tick));
    }

    // Round half up, as the SDK does
    let lower = align_tick_down(tick, tick_spacing)?;
    let offset = tick - lower;
    let rounded = if offset >= tick_spacing - offset {
        lower + tick_spacing
    } else {
        lower
    };

    if rounded < MIN_TICK {
        Ok(rounded + tick_spacing)
    } else if rounded > MAX_TICK {
        Ok(rounded - tick_spacing)
    } else {
        Ok(rounded)
    }
}

/// Lowest tick usable as a range boundary for the given spacing
pub fn usable_min_tick(tick_spacing: i32) -> CoreResult<i32> {
    if tick_spacing <= 0 {
        return Err(LiquidityCoreError::InvalidTickSpacing(tick_spacing));
    }

    // Round MIN_TICK towards zero
    Ok(-(MAX_TICK / tick_spacing) * tick_spacing)
}

/// Highest tick usable as a range boundary for the given spacing
pub fn usable_max_tick(tick_spacing: i32) -> CoreResult<i32> {
    if tick_spacing <= 0 {
        return Err(LiquidityCoreError::InvalidTickSpacing(tick_spacing));
    }

    Ok((MAX_TICK / tick_spacing) * tick_spacing)
}
