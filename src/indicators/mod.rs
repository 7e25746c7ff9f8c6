//! Pure technical-indicator functions over OHLCV series.
//!
//! Every calculator returns `None` when the series is too short for its
//! period; nothing in this module raises.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
