//! Regime detection from realized volatility, trend strength and stress days.

use crate::common::math;
use crate::indicators::trend::adx;
use crate::models::{Candle, Symbol};
use crate::regime::{MarketRegime, RegimeCache, RegimeParameters};
use std::time::Duration;
use tracing::debug;

const VOL_WINDOW: usize = 20;
const VOL_DISTRIBUTION: usize = 252;
const STRESS_LOOKBACK: usize = 10;
const STRESS_RETURN_PCT: f64 = 0.05;
const STRESS_DAY_LIMIT: usize = 3;
const ADX_TREND_LEVEL: f64 = 25.0;
const STRESS_INDEX_CRISIS_LEVEL: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VolatilityClass {
    Crisis,
    High,
    Low,
    Normal,
}

pub struct RegimeDetector {
    cache: RegimeCache,
    lookback: usize,
}

impl RegimeDetector {
    pub fn new(cache_ttl: Duration) -> Self {
        Self {
            cache: RegimeCache::new(cache_ttl),
            lookback: 100,
        }
    }

    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    /// Classify the current regime for one symbol.
    ///
    /// `stress_index` is an optional external volatility proxy; absence falls
    /// back to realized-volatility-only classification. Fewer bars than the
    /// lookback classify as Choppy, the conservative default, without error.
    pub fn detect(
        &self,
        symbol: &Symbol,
        candles: &[Candle],
        stress_index: Option<f64>,
    ) -> MarketRegime {
        if let Some(cached) = self.cache.get(symbol) {
            debug!(symbol = %symbol, regime = %cached, "regime cache hit");
            return cached;
        }

        let regime = self.classify(candles, stress_index);
        self.cache.insert(symbol.clone(), regime);
        debug!(symbol = %symbol, regime = %regime, bars = candles.len(), "regime classified");
        regime
    }

    /// Pure lookup of the parameter bundle for a regime.
    pub fn parameters(&self, regime: MarketRegime) -> RegimeParameters {
        RegimeParameters::for_regime(regime)
    }

    /// Drop all cached classifications.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }

    fn classify(&self, candles: &[Candle], stress_index: Option<f64>) -> MarketRegime {
        if candles.len() < self.lookback {
            return MarketRegime::Choppy;
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let returns = math::simple_returns(&closes);

        let volatility = self.volatility_class(&returns, stress_index);
        let trend = self.trend_class(candles);
        let stressed = self.stress_days(&returns) >= STRESS_DAY_LIMIT;

        // Priority: crisis > high vol > (low vol merged with trend) > trend > choppy.
        if stressed || volatility == VolatilityClass::Crisis {
            return MarketRegime::Crisis;
        }
        if volatility == VolatilityClass::High {
            return MarketRegime::HighVolatility;
        }
        match (volatility, trend) {
            (VolatilityClass::Low, Some(trending)) => trending,
            (VolatilityClass::Low, None) => MarketRegime::LowVolatility,
            (_, Some(trending)) => trending,
            (_, None) => MarketRegime::Choppy,
        }
    }

    fn volatility_class(&self, returns: &[f64], stress_index: Option<f64>) -> VolatilityClass {
        if let Some(level) = stress_index {
            if level >= STRESS_INDEX_CRISIS_LEVEL {
                return VolatilityClass::Crisis;
            }
        }

        let Some(current) = math::annualized_volatility(returns, VOL_WINDOW) else {
            return VolatilityClass::Normal;
        };

        // Rolling 20-day vols over up to a year of returns form the trailing
        // distribution the current reading is ranked against.
        let start = returns.len().saturating_sub(VOL_DISTRIBUTION);
        let trailing = &returns[start..];
        let mut distribution = Vec::new();
        for end in VOL_WINDOW..=trailing.len() {
            if let Some(vol) = math::annualized_volatility(&trailing[..end], VOL_WINDOW) {
                distribution.push(vol);
            }
        }

        match math::percentile_rank(&distribution, current) {
            Some(p) if p > 90.0 => VolatilityClass::High,
            Some(p) if p < 25.0 => VolatilityClass::Low,
            _ => VolatilityClass::Normal,
        }
    }

    fn trend_class(&self, candles: &[Candle]) -> Option<MarketRegime> {
        let adx = adx::calculate_adx_default(candles)?;
        if adx.value <= ADX_TREND_LEVEL {
            return None;
        }
        if adx.plus_di > adx.minus_di {
            Some(MarketRegime::TrendingUp)
        } else {
            Some(MarketRegime::TrendingDown)
        }
    }

    fn stress_days(&self, returns: &[f64]) -> usize {
        let start = returns.len().saturating_sub(STRESS_LOOKBACK);
        returns[start..]
            .iter()
            .filter(|r| r.abs() > STRESS_RETURN_PCT)
            .count()
    }
}
