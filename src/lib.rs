//! quantrix: regime-aware signal generation and risk-capped position sizing.
//!
//! For each candidate symbol per cycle the engine runs a fixed pipeline:
//! regime detection, three independent strategy generators, a regime-weighted
//! combiner, a five-factor confidence analyzer and a layered position sizer.
//! Given identical inputs the output is deterministic; the engine has no side
//! effects beyond its returned decisions.

pub mod common;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod regime;
pub mod services;
pub mod signals;
pub mod sizing;
pub mod strategies;

pub use config::EngineConfig;
pub use engine::DecisionEngine;
pub use error::{EngineError, MarketDataError};
pub use models::{Candle, Decision, PortfolioSnapshot, SignalDirection, Symbol, Timeframe, TradingSignal};
pub use regime::{MarketRegime, RegimeDetector, RegimeParameters};
