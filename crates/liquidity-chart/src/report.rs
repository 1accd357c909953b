//! Chart input loading and report assembly

use std::fs;

use liquidity_core::format::format_units;
use liquidity_core::{
    calculate_bar_data, FormattedBar, LiquidityBars, PoolSnapshot, Position, PositionState,
    TickDatum,
};
use serde::{Deserialize, Serialize};

use crate::config::{ChartConfig, PositionConfig};
use crate::error::{ChartError, ChartResult};

/// Pool snapshot plus its initialized ticks, as exported by an indexer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartInput {
    pub pool: PoolSnapshot,
    pub ticks: Vec<TickDatum>,
}

impl ChartInput {
    pub fn load(path: &str) -> ChartResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Sized position with its amounts rendered in whole token units
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    #[serde(flatten)]
    pub position: Position,
    pub state: PositionState,
    pub amount0: String,
    pub amount1: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    #[serde(flatten)]
    pub bars: LiquidityBars,
    pub formatted: Vec<FormattedBar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionReport>,
}

/// Run the bar aggregator and optional position sizing for one input
pub fn build_report(input: &ChartInput, config: &ChartConfig) -> ChartResult<ChartReport> {
    let bars = calculate_bar_data(&input.ticks, &input.pool, config.inverted)?;
    let formatted = bars.formatted(&input.pool, config.decimal_places);

    log::info!(
        "{}/{}: {} bars, active index {}",
        input.pool.token0.symbol,
        input.pool.token1.symbol,
        bars.bars.len(),
        bars.active_tick_index
    );

    let position = config
        .position
        .as_ref()
        .map(|position| size_position(&input.pool, position, config.decimal_places))
        .transpose()?;

    Ok(ChartReport {
        bars,
        formatted,
        position,
    })
}

fn size_position(
    pool: &PoolSnapshot,
    config: &PositionConfig,
    decimal_places: u32,
) -> ChartResult<PositionReport> {
    let (budget0, budget1) = config.budgets(pool.token0.decimals, pool.token1.decimals)?;
    let position = Position::from_amounts(
        pool,
        config.tick_lower,
        config.tick_upper,
        &budget0,
        &budget1,
    )?;
    let (amount0, amount1) = position.amounts(pool)?;

    log::info!(
        "position [{}, {}) sized to liquidity {}",
        position.tick_lower,
        position.tick_upper,
        position.liquidity
    );

    Ok(PositionReport {
        state: position.state(pool),
        amount0: format_units(&amount0, pool.token0.decimals, decimal_places),
        amount1: format_units(&amount1, pool.token1.decimals, decimal_places),
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use liquidity_core::{LiquidityCoreError, Token};
    use std::io::Write;

    fn input() -> ChartInput {
        ChartInput {
            pool: PoolSnapshot::at_tick(
                100,
                60,
                Token::new("0x01", "USDC", 6),
                Token::new("0x02", "WETH", 18),
            )
            .unwrap(),
            ticks: vec![TickDatum::new(0, 1000), TickDatum::new(120, -1000)],
        }
    }

    #[test]
    fn test_report_without_position() {
        let report = build_report(&input(), &ChartConfig::default()).unwrap();
        assert_eq!(report.bars.bars.len(), 2);
        assert_eq!(report.bars.active_tick_index, 1);
        assert_eq!(report.formatted.len(), 2);
        assert!(report.position.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["activeTickIndex"], 1);
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_report_with_position() {
        let config = ChartConfig {
            position: Some(PositionConfig {
                tick_lower: -600,
                tick_upper: 600,
                amount0: Some("1000".to_string()),
                amount1: Some("1".to_string()),
            }),
            ..ChartConfig::default()
        };

        let report = build_report(&input(), &config).unwrap();
        let position = report.position.unwrap();
        assert_eq!(position.state, PositionState::InRange);
        assert!(position.position.liquidity > num_bigint::BigUint::from(0u32));
    }

    #[test]
    fn test_unbounded_position_is_rejected() {
        let config = ChartConfig {
            position: Some(PositionConfig {
                tick_lower: 600,
                tick_upper: 1200,
                amount0: None,
                amount1: Some("1".to_string()),
            }),
            ..ChartConfig::default()
        };

        // Range above the price needs token0, which has no limit
        assert!(matches!(
            build_report(&input(), &config),
            Err(ChartError::Core(LiquidityCoreError::UnboundedLiquidity))
        ));
    }

    #[test]
    fn test_load_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "pool": {{
                    "tickCurrent": 0,
                    "tickSpacing": 60,
                    "sqrtRatioX96": "79228162514264337593543950336",
                    "token0": {{"address": "0x01", "symbol": "USDC", "decimals": 6}},
                    "token1": {{"address": "0x02", "symbol": "WETH", "decimals": 18}}
                }},
                "ticks": [
                    {{"tick": -60, "liquidityNet": "5000"}},
                    {{"tick": 60, "liquidityNet": "-5000"}}
                ]
            }}"#
        )
        .unwrap();

        let input = ChartInput::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(input.ticks.len(), 2);
        assert_eq!(input.pool.tick_spacing, 60);

        let report = build_report(&input, &ChartConfig::default()).unwrap();
        assert_eq!(report.bars.active_bar().unwrap().tick, 0);
    }
}
