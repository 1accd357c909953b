//! # Liquidity Bars
//!
//! Turns the sparse, per-tick liquidity deltas of a pool into a dense series
//! of depth bars, one per initialized tick, with the bucket that holds the
//! current price split between the two tokens.
//!
//! Side convention of the reference AMM: liquidity above the active tick is
//! backed by token0 and liquidity at or below it by token1. An AMM with the
//! opposite tick orientation needs the sides swapped.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::errors::{CoreResult, LiquidityCoreError};
use crate::math::big_int::to_biguint;
use crate::math::sqrt_price_math::{get_amount_0_delta, get_amount_1_delta};
use crate::math::tick_math::{bound, get_sqrt_ratio_at_tick, is_tick_valid};
use crate::types::{BarDatum, LiquidityBars, PoolSnapshot, TickDatum};

/// Token amounts (token0, token1) locked by `liquidity` over `[tick, tick + tick_spacing]`
pub fn calculate_tokens_locked(
    tick: i32,
    tick_spacing: i32,
    liquidity: &BigUint,
) -> CoreResult<(BigUint, BigUint)> {
    if tick_spacing <= 0 {
        return Err(LiquidityCoreError::InvalidTickSpacing(tick_spacing));
    }

    let sqrt_lower = get_sqrt_ratio_at_tick(bound(tick))?;
    let sqrt_upper = get_sqrt_ratio_at_tick(bound(tick.saturating_add(tick_spacing)))?;

    Ok((
        get_amount_0_delta(&sqrt_lower, &sqrt_upper, liquidity)?,
        get_amount_1_delta(&sqrt_lower, &sqrt_upper, liquidity)?,
    ))
}

/// Token amounts (token0, token1) locked by `liquidity` in the active bucket
///
/// token0 covers the part of the bucket the price has already crossed,
/// `[align_down(tick_current), price]`, and token1 the rest up to
/// `align_up(tick_current)`. A spacing-aligned current tick gives an empty
/// bucket.
pub fn calculate_active_tokens_locked(
    pool: &PoolSnapshot,
    liquidity: &BigUint,
) -> CoreResult<(BigUint, BigUint)> {
    let tick_floor = pool.tick_active()?;
    let tick_ceil = if tick_floor == pool.tick_current {
        tick_floor
    } else {
        tick_floor.saturating_add(pool.tick_spacing)
    };

    let sqrt_floor = get_sqrt_ratio_at_tick(bound(tick_floor))?;
    let sqrt_ceil = get_sqrt_ratio_at_tick(bound(tick_ceil))?;
    let sqrt_next =
        get_sqrt_ratio_at_tick(bound(tick_floor.saturating_add(pool.tick_spacing)))?;
    let sqrt_current = &pool.sqrt_ratio_x96;

    if *sqrt_current < sqrt_floor || *sqrt_current > sqrt_next {
        return Err(LiquidityCoreError::inconsistent_pool(format!(
            "sqrt price {} outside active bucket starting at tick {}",
            sqrt_current, tick_floor
        )));
    }

    let (lower0, upper0) = sorted(&sqrt_floor, sqrt_current);
    let (lower1, upper1) = sorted(sqrt_current, &sqrt_ceil);

    Ok((
        get_amount_0_delta(lower0, upper0, liquidity)?,
        get_amount_1_delta(lower1, upper1, liquidity)?,
    ))
}

fn sorted<'a>(a: &'a BigUint, b: &'a BigUint) -> (&'a BigUint, &'a BigUint) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Build the liquidity bars for a pool
///
/// Bars come out in ascending tick order when `inverted` is set and in
/// descending order otherwise; `active_tick_index` follows the ordering.
pub fn calculate_bar_data(
    ticks: &[TickDatum],
    pool: &PoolSnapshot,
    inverted: bool,
) -> CoreResult<LiquidityBars> {
    pool.validate()?;

    if ticks.is_empty() {
        return Err(LiquidityCoreError::EmptyTickSet);
    }
    if let Some(invalid) = ticks.iter().find(|datum| !is_tick_valid(datum.tick)) {
        return Err(LiquidityCoreError::InvalidTick(invalid.tick));
    }

    // Stable sort; duplicate ticks keep their input order
    let mut data = ticks.to_vec();
    data.sort_by_key(|datum| datum.tick);

    let tick_spacing = pool.tick_spacing;
    let tick_active = pool.tick_active()?;

    // The active bucket is the last datum at or below the active tick
    let active_tick_index = match data.iter().position(|datum| datum.tick > tick_active) {
        Some(0) => return Err(LiquidityCoreError::NoActiveBucket(tick_active)),
        Some(index) => index - 1,
        None => data.len() - 1,
    };

    // Buckets render on spacing-aligned boundaries
    data[active_tick_index].tick = tick_active;

    let mut bars = Vec::with_capacity(data.len());
    let mut liquidity_active = BigInt::zero();

    for datum in &data {
        liquidity_active += &datum.liquidity_net;
        let liquidity = to_biguint(&liquidity_active)
            .ok_or(LiquidityCoreError::NegativeLiquidity(datum.tick))?;

        let (amount0_locked, amount1_locked) =
            calculate_tokens_locked(datum.tick, tick_spacing, &liquidity)?;

        let above = datum.tick > tick_active;
        bars.push(BarDatum {
            tick: datum.tick,
            amount0_locked: if above { amount0_locked } else { BigUint::zero() },
            amount1_locked: if above { BigUint::zero() } else { amount1_locked },
            display_liquidity0: if above { liquidity.clone() } else { BigUint::zero() },
            display_liquidity1: if above { BigUint::zero() } else { liquidity.clone() },
            liquidity,
        });
    }

    // Recompute the active bucket one crossing ahead, split at the live price
    let active_liquidity = bars[active_tick_index].liquidity.clone();
    let lookahead =
        BigInt::from(active_liquidity.clone()) + &data[active_tick_index].liquidity_net;
    let (amount0_locked, amount1_locked) = match to_biguint(&lookahead) {
        Some(lookahead) => calculate_active_tokens_locked(pool, &lookahead)?,
        // Nothing can be locked by a negative lookahead
        None => (BigUint::zero(), BigUint::zero()),
    };

    // Share of the bucket already traversed by the price goes to token0
    let offset = pool.tick_current.rem_euclid(tick_spacing);
    let display_liquidity0 =
        &active_liquidity * BigUint::from(offset as u32) / BigUint::from(tick_spacing as u32);
    let display_liquidity1 = &active_liquidity - &display_liquidity0;

    let active = &mut bars[active_tick_index];
    active.amount0_locked = amount0_locked;
    active.amount1_locked = amount1_locked;
    active.display_liquidity0 = display_liquidity0;
    active.display_liquidity1 = display_liquidity1;

    log::debug!(
        "built {} liquidity bars, tick_active={}, active_tick_index={}, active_liquidity={}",
        bars.len(),
        tick_active,
        active_tick_index,
        active_liquidity
    );

    let result = LiquidityBars {
        bars,
        active_tick_index,
    };

    if inverted {
        return Ok(result);
    }

    Ok(result.reversed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;

    fn pool_at(tick: i32, tick_spacing: i32) -> PoolSnapshot {
        PoolSnapshot::at_tick(
            tick,
            tick_spacing,
            Token::new("0x01", "USDC", 6),
            Token::new("0x02", "WETH", 18),
        )
        .unwrap()
    }

    fn big(value: u128) -> BigUint {
        BigUint::from(value)
    }

    #[test]
    fn test_single_range() {
        let ticks = vec![TickDatum::new(0, 1000), TickDatum::new(120, -1000)];
        let pool = pool_at(100, 60);

        let result = calculate_bar_data(&ticks, &pool, true).unwrap();
        assert_eq!(result.active_tick_index, 0);
        assert_eq!(result.bars[0].tick, 60);
        assert_eq!(result.bars.iter().filter(|bar| bar.liquidity == big(1000)).count(), 1);
        assert_eq!(result.bars[1].liquidity, BigUint::zero());
    }

    #[test]
    fn test_active_bucket_split() {
        let ticks = vec![TickDatum::new(0, 1000), TickDatum::new(120, -1000)];
        let pool = pool_at(100, 60);

        let result = calculate_bar_data(&ticks, &pool, true).unwrap();
        let active = result.active_bar().unwrap();

        // 40 of 60 ticks into the bucket
        assert_eq!(active.display_liquidity0, big(666));
        assert_eq!(active.display_liquidity1, big(334));
        assert_eq!(&active.display_liquidity0 + &active.display_liquidity1, active.liquidity);
    }

    #[test]
    fn test_reversed_by_default() {
        let ticks = vec![
            TickDatum::new(-60, 500),
            TickDatum::new(0, 1000),
            TickDatum::new(60, -1000),
            TickDatum::new(120, -500),
        ];
        let pool = pool_at(10, 60);

        let ascending = calculate_bar_data(&ticks, &pool, true).unwrap();
        let descending = calculate_bar_data(&ticks, &pool, false).unwrap();

        assert_eq!(ascending.active_tick_index, 1);
        assert_eq!(descending.active_tick_index, 2);
        assert_eq!(
            descending.bars.iter().map(|bar| bar.tick).collect::<Vec<_>>(),
            vec![120, 60, 0, -60]
        );
    }

    #[test]
    fn test_unsorted_input() {
        let ticks = vec![TickDatum::new(120, -1000), TickDatum::new(0, 1000)];
        let pool = pool_at(100, 60);

        let result = calculate_bar_data(&ticks, &pool, true).unwrap();
        assert_eq!(result.bars.iter().map(|bar| bar.tick).collect::<Vec<_>>(), vec![60, 120]);
    }

    #[test]
    fn test_price_above_all_ticks() {
        let ticks = vec![TickDatum::new(-120, 1000), TickDatum::new(-60, -1000)];
        let pool = pool_at(300, 60);

        let result = calculate_bar_data(&ticks, &pool, true).unwrap();
        assert_eq!(result.active_tick_index, 1);
        assert_eq!(result.bars[1].tick, 300);
    }

    #[test]
    fn test_sides_follow_active_tick() {
        let ticks = vec![
            TickDatum::new(-120, 1000),
            TickDatum::new(0, 1000),
            TickDatum::new(120, -2000),
        ];
        let pool = pool_at(30, 60);

        let result = calculate_bar_data(&ticks, &pool, true).unwrap();
        let below = &result.bars[0];
        assert!(below.amount0_locked.is_zero());
        assert!(below.amount1_locked > BigUint::zero());
        assert_eq!(below.display_liquidity1, below.liquidity);

        // Active bucket locks both tokens
        let active = &result.bars[1];
        assert!(active.amount0_locked > BigUint::zero());
        assert!(active.amount1_locked > BigUint::zero());
    }

    #[test]
    fn test_empty_tick_set() {
        let pool = pool_at(0, 60);
        assert_eq!(calculate_bar_data(&[], &pool, false), Err(LiquidityCoreError::EmptyTickSet));
    }

    #[test]
    fn test_no_active_bucket() {
        let ticks = vec![TickDatum::new(120, 1000), TickDatum::new(240, -1000)];
        let pool = pool_at(0, 60);
        assert_eq!(
            calculate_bar_data(&ticks, &pool, true),
            Err(LiquidityCoreError::NoActiveBucket(0))
        );
    }

    #[test]
    fn test_negative_running_liquidity() {
        let ticks = vec![TickDatum::new(0, 1000), TickDatum::new(60, -2000)];
        let pool = pool_at(0, 60);
        assert_eq!(
            calculate_bar_data(&ticks, &pool, true),
            Err(LiquidityCoreError::NegativeLiquidity(60))
        );
    }

    #[test]
    fn test_inconsistent_pool_price() {
        let ticks = vec![TickDatum::new(0, 1000), TickDatum::new(120, -1000)];
        let mut pool = pool_at(100, 60);
        pool.sqrt_ratio_x96 = get_sqrt_ratio_at_tick(500).unwrap();

        assert!(matches!(
            calculate_bar_data(&ticks, &pool, true),
            Err(LiquidityCoreError::InconsistentPoolState(_))
        ));
    }

    #[test]
    fn test_tokens_locked_bucket() {
        let liquidity = big(1_000_000_000);
        let (amount0, amount1) = calculate_tokens_locked(0, 60, &liquidity).unwrap();

        let sqrt_lower = get_sqrt_ratio_at_tick(0).unwrap();
        let sqrt_upper = get_sqrt_ratio_at_tick(60).unwrap();
        assert_eq!(amount0, get_amount_0_delta(&sqrt_lower, &sqrt_upper, &liquidity).unwrap());
        assert_eq!(amount1, get_amount_1_delta(&sqrt_lower, &sqrt_upper, &liquidity).unwrap());

        // The last bucket is clamped at MAX_TICK
        let (amount0, amount1) =
            calculate_tokens_locked(crate::constants::MAX_TICK, 60, &liquidity).unwrap();
        assert!(amount0.is_zero() && amount1.is_zero());
    }

    #[test]
    fn test_active_tokens_locked_at_bucket_edge() {
        // Price exactly on a spacing boundary: the bucket is empty
        let pool = pool_at(60, 60);
        let (amount0, amount1) = calculate_active_tokens_locked(&pool, &big(1_000_000)).unwrap();
        assert!(amount0.is_zero());
        assert!(amount1.is_zero());
    }

    #[test]
    fn test_active_tokens_locked_known_values() {
        let liquidity = big(2_000_000_000_000);

        let (amount0, amount1) =
            calculate_active_tokens_locked(&pool_at(119, 60), &liquidity).unwrap();
        assert_eq!(amount0, big(5_873_366_267));
        assert_eq!(amount1, big(100_594_228));

        let (amount0, amount1) =
            calculate_active_tokens_locked(&pool_at(61, 60), &liquidity).unwrap();
        assert_eq!(amount0, big(99_692_987));
        assert_eq!(amount1, big(5_926_462_484));
    }

    #[test]
    fn test_active_bar_amounts_follow_display_split() {
        let ticks = vec![
            TickDatum::new(0, 1_000_000_000_000i64),
            TickDatum::new(120, -1_000_000_000_000i64),
        ];

        let mut previous: Option<BarDatum> = None;
        for tick_current in [61, 75, 90, 105, 119] {
            let result = calculate_bar_data(&ticks, &pool_at(tick_current, 60), true).unwrap();
            let active = result.active_bar().unwrap().clone();

            if let Some(previous) = &previous {
                // Crossing further into the bucket moves both views towards token0
                assert!(active.display_liquidity0 > previous.display_liquidity0);
                assert!(active.amount0_locked > previous.amount0_locked);
                assert!(active.display_liquidity1 < previous.display_liquidity1);
                assert!(active.amount1_locked < previous.amount1_locked);
            }
            previous = Some(active);
        }

        let aligned = calculate_bar_data(&ticks, &pool_at(60, 60), true).unwrap();
        let active = aligned.active_bar().unwrap();
        assert!(active.display_liquidity0.is_zero());
        assert!(active.amount0_locked.is_zero() && active.amount1_locked.is_zero());
    }
}
