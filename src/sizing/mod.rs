//! Risk-adjusted position sizing.

pub mod sizer;
pub mod stats;

pub use sizer::{PositionSizer, SizerConfig, SizingContext};
pub use stats::{KellyInputs, PerformanceBook, MIN_CLOSED_TRADES};
