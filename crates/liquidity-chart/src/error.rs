//! Error types for the chart driver

use liquidity_core::LiquidityCoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid parameter {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: String,
        value: String,
        expected: String,
    },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Core(#[from] LiquidityCoreError),
}

impl ChartError {
    pub fn invalid_parameter(name: &str, value: &str, expected: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn io(path: &str, err: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for ChartError {
    fn from(err: toml::de::Error) -> Self {
        ChartError::SerializationError(err.to_string())
    }
}

impl From<toml::ser::Error> for ChartError {
    fn from(err: toml::ser::Error) -> Self {
        ChartError::SerializationError(err.to_string())
    }
}

pub type ChartResult<T> = Result<T, ChartError>;
