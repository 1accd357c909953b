pub mod config;
pub mod error;
pub mod report;

pub use config::{ChartConfig, PositionConfig};
pub use error::{ChartError, ChartResult};
pub use report::{build_report, ChartInput, ChartReport, PositionReport};
