//! Canonical data model shared across the engine layers.

pub mod indicators;
pub mod market;
pub mod portfolio;
pub mod signal;

pub use indicators::{
    AdxIndicator, AtrIndicator, BollingerBandsIndicator, EmaIndicator, MacdIndicator,
    RocIndicator, RsiIndicator, StochasticIndicator, SupportResistanceIndicator,
};
pub use market::{Candle, Symbol, Timeframe};
pub use portfolio::{PortfolioSnapshot, Position, PositionSide};
pub use signal::{Decision, SignalDirection, TradingSignal};
