use std::fs;

use liquidity_core::constants::{DEFAULT_DISPLAY_DECIMALS, MAX_TICK, MIN_TICK};
use liquidity_core::format::parse_units;
use liquidity_core::Budget;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart configuration loaded from TOML file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChartConfig {
    /// Emit bars in ascending tick order
    #[serde(default)]
    pub inverted: bool,

    /// Fractional digits shown for locked amounts
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Optional position to size against the pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionConfig>,
}

/// Position to size from token budgets
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PositionConfig {
    pub tick_lower: i32,
    pub tick_upper: i32,

    /// Token0 budget in whole token units; absent means no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount0: Option<String>,

    /// Token1 budget in whole token units; absent means no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount1: Option<String>,
}

fn default_decimal_places() -> u32 {
    DEFAULT_DISPLAY_DECIMALS
}

impl ChartConfig {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> ChartResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;

        let config: ChartConfig = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &str) -> ChartResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ChartError::io(path, e))?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ChartResult<()> {
        if self.decimal_places > 18 {
            return Err(ChartError::invalid_parameter(
                "decimal_places",
                &self.decimal_places.to_string(),
                "at most 18",
            ));
        }

        if let Some(position) = &self.position {
            position.validate()?;
        }

        Ok(())
    }
}

impl PositionConfig {
    fn validate(&self) -> ChartResult<()> {
        for (name, tick) in [("tick_lower", self.tick_lower), ("tick_upper", self.tick_upper)] {
            if !(MIN_TICK..=MAX_TICK).contains(&tick) {
                return Err(ChartError::invalid_parameter(
                    name,
                    &tick.to_string(),
                    &format!("within [{}, {}]", MIN_TICK, MAX_TICK),
                ));
            }
        }

        if self.tick_lower >= self.tick_upper {
            return Err(ChartError::invalid_parameter(
                "tick_upper",
                &self.tick_upper.to_string(),
                &format!("greater than tick_lower ({})", self.tick_lower),
            ));
        }

        if self.amount0.is_none() && self.amount1.is_none() {
            return Err(ChartError::InvalidConfig(
                "position needs at least one of amount0, amount1".to_string(),
            ));
        }

        Ok(())
    }

    /// Token budgets in raw units for the given token decimals
    pub fn budgets(&self, decimals0: u8, decimals1: u8) -> ChartResult<(Budget, Budget)> {
        Ok((
            parse_budget(self.amount0.as_deref(), decimals0)?,
            parse_budget(self.amount1.as_deref(), decimals1)?,
        ))
    }
}

fn parse_budget(amount: Option<&str>, decimals: u8) -> ChartResult<Budget> {
    match amount {
        Some(amount) => Ok(Budget::from_raw(parse_units(amount, decimals)?)),
        None => Ok(Budget::Unbounded),
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            inverted: false,
            decimal_places: DEFAULT_DISPLAY_DECIMALS,
            position: None,
        }
    }
}
