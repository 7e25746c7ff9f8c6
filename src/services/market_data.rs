//! Market data provider interfaces.
//!
//! The engine's only suspension points are these calls; everything numeric
//! downstream is synchronous. Providers must tolerate partial results and
//! return fewer bars than requested rather than failing.

use crate::error::MarketDataError;
use crate::models::{Candle, Symbol, Timeframe};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Historical candles for a symbol, oldest first, at most `limit` bars.
    async fn get_candles(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;
}

/// Optional external volatility proxy (a stress index level). Absence must
/// not fail regime detection.
#[async_trait]
pub trait VolatilityIndexProvider: Send + Sync {
    async fn current_level(&self) -> Option<f64>;
}

/// In-memory provider backed by canned series, for the demo binary and tests.
#[derive(Default)]
pub struct CannedDataProvider {
    series: HashMap<(String, Timeframe), Vec<Candle>>,
}

impl CannedDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(
        mut self,
        ticker: impl Into<String>,
        timeframe: Timeframe,
        candles: Vec<Candle>,
    ) -> Self {
        self.series.insert((ticker.into(), timeframe), candles);
        self
    }
}

#[async_trait]
impl MarketDataProvider for CannedDataProvider {
    async fn get_candles(
        &self,
        symbol: &Symbol,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let Some(candles) = self.series.get(&(symbol.ticker.clone(), timeframe)) else {
            // Absence degrades to an empty result, as a live provider would
            // on a symbol with no history.
            return Ok(Vec::new());
        };
        let start = candles.len().saturating_sub(limit);
        Ok(candles[start..].to_vec())
    }
}

/// A fixed stress-index level, for the demo binary and tests.
pub struct FixedVolatilityIndex {
    level: f64,
}

impl FixedVolatilityIndex {
    pub fn new(level: f64) -> Self {
        Self { level }
    }
}

#[async_trait]
impl VolatilityIndexProvider for FixedVolatilityIndex {
    async fn current_level(&self) -> Option<f64> {
        Some(self.level)
    }
}
