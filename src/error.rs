//! Engine error taxonomy.
//!
//! Recoverable failures (insufficient data, numeric breakdowns) are mapped to
//! per-stage defaults inside the pipeline; `InvalidSignal` is a contract
//! violation and propagates.

use thiserror::Error;

/// Stage names used in diagnostics when a symbol is dropped from a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RegimeDetection,
    SignalGeneration,
    Combination,
    ConfidenceScoring,
    Sizing,
    DataFetch,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::RegimeDetection => "regime_detection",
            Stage::SignalGeneration => "signal_generation",
            Stage::Combination => "combination",
            Stage::ConfidenceScoring => "confidence_scoring",
            Stage::Sizing => "sizing",
            Stage::DataFetch => "data_fetch",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("insufficient data: needed {needed} bars, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("invalid signal: {0}")]
    InvalidSignal(String),

    #[error("computation failed: {0}")]
    Computation(String),

    #[error("market data error: {0}")]
    MarketData(#[from] MarketDataError),
}

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("no data available for {symbol} on timeframe {timeframe}")]
    NoData { symbol: String, timeframe: String },

    #[error("provider failure: {0}")]
    Provider(String),
}
