//! # Core Type Definitions
//! 
//! Value types exchanged with the data-fetching and charting layers.

pub mod bar;
pub mod budget;
pub mod pool;
pub mod position;
pub mod serde_str;
pub mod tick;

// Re-export all types
pub use bar::*;
pub use budget::*;
pub use pool::*;
pub use position::*;
pub use tick::*;
