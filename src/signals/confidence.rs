//! Five-factor confidence scoring for combined signals.
//!
//! Each factor is optional; the weighted average is renormalized over the
//! factors that could actually be computed. Total failure scores the fixed
//! conservative 0.3 rather than erroring.

use crate::common::math;
use crate::indicators::momentum::{macd, rsi};
use crate::indicators::structure::support_resistance;
use crate::indicators::trend::ema;
use crate::models::{Candle, SignalDirection, TradingSignal};
use crate::regime::MarketRegime;
use tracing::trace;

pub const FALLBACK_CONFIDENCE: f64 = 0.3;

const VOLUME_MA_PERIOD: usize = 20;
const SR_NEAR_PCT: f64 = 2.0;
const SR_FAR_PCT: f64 = 5.0;
const SR_NEAR_SCORE: f64 = 0.9;
const SR_FAR_SCORE: f64 = 0.3;
const MTF_FAST: u32 = 10;
const MTF_SLOW: u32 = 30;

/// The three series the analyzer inspects. Hourly and four-hour may be empty
/// when the provider has no intraday data; the corresponding frames simply
/// drop out of the multi-timeframe check.
pub struct TimeframeBars<'a> {
    pub hourly: &'a [Candle],
    pub four_hour: &'a [Candle],
    pub daily: &'a [Candle],
}

#[derive(Debug, Clone)]
pub struct FactorWeights {
    pub volume: f64,
    pub multi_timeframe: f64,
    pub support_resistance: f64,
    pub regime_alignment: f64,
    pub pattern_strength: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            volume: 0.25,
            multi_timeframe: 0.30,
            support_resistance: 0.20,
            regime_alignment: 0.15,
            pattern_strength: 0.10,
        }
    }
}

pub struct ConfidenceAnalyzer {
    weights: FactorWeights,
}

impl Default for ConfidenceAnalyzer {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
        }
    }
}

impl ConfidenceAnalyzer {
    pub fn new(weights: FactorWeights) -> Self {
        Self { weights }
    }

    /// Score a signal against the five quality factors, in [0, 1].
    pub fn score(
        &self,
        signal: &TradingSignal,
        bars: &TimeframeBars<'_>,
        regime: MarketRegime,
    ) -> f64 {
        let factors = [
            (self.weights.volume, self.volume_confirmation(bars.daily)),
            (
                self.weights.multi_timeframe,
                self.multi_timeframe_alignment(signal.direction, bars),
            ),
            (
                self.weights.support_resistance,
                self.support_resistance_confluence(signal, bars.daily),
            ),
            (
                self.weights.regime_alignment,
                self.regime_alignment(signal.direction, regime),
            ),
            (
                self.weights.pattern_strength,
                self.pattern_strength(signal.direction, bars.daily),
            ),
        ];

        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;
        for (weight, factor) in &factors {
            if let Some(value) = factor {
                weighted_sum += weight * value;
                weight_total += weight;
            }
        }

        if weight_total == 0.0 {
            return FALLBACK_CONFIDENCE;
        }
        let score = (weighted_sum / weight_total).clamp(0.0, 1.0);
        trace!(symbol = %signal.symbol, score, "confidence scored");
        score
    }

    /// Latest volume against its 20-period average, bucketed.
    fn volume_confirmation(&self, daily: &[Candle]) -> Option<f64> {
        let volumes: Vec<f64> = daily.iter().map(|c| c.volume).collect();
        let average = math::sma(&volumes, VOLUME_MA_PERIOD)?;
        if average <= 0.0 {
            return None;
        }
        let ratio = daily.last()?.volume / average;
        Some(match ratio {
            r if r >= 2.0 => 1.0,
            r if r >= 1.5 => 0.8,
            r if r >= 1.2 => 0.65,
            r if r >= 1.0 => 0.5,
            r if r >= 0.8 => 0.3,
            _ => 0.1,
        })
    }

    /// Weighted fraction of the hourly/four-hour/daily crossover states that
    /// agree with the candidate direction (0.3 / 0.4 / 0.3).
    fn multi_timeframe_alignment(
        &self,
        direction: SignalDirection,
        bars: &TimeframeBars<'_>,
    ) -> Option<f64> {
        let wanted = match direction {
            SignalDirection::Buy => 1,
            SignalDirection::Sell => -1,
            SignalDirection::Hold => return None,
        };

        let frames = [
            (0.3, ema::sma_cross_state(bars.hourly, MTF_FAST, MTF_SLOW)),
            (0.4, ema::sma_cross_state(bars.four_hour, MTF_FAST, MTF_SLOW)),
            (0.3, ema::sma_cross_state(bars.daily, MTF_FAST, MTF_SLOW)),
        ];

        let mut agreeing = 0.0;
        let mut available = 0.0;
        for (weight, state) in &frames {
            if let Some(state) = state {
                available += weight;
                if *state == wanted {
                    agreeing += weight;
                }
            }
        }
        if available == 0.0 {
            return None;
        }
        Some(agreeing / available)
    }

    /// High when price sits near a qualifying support (BUY) or resistance
    /// (SELL), decaying linearly from 0.9 at 2% to 0.3 at 5%.
    fn support_resistance_confluence(
        &self,
        signal: &TradingSignal,
        daily: &[Candle],
    ) -> Option<f64> {
        let levels = support_resistance::calculate_support_resistance_default(daily, signal.price)?;
        let distance_pct = match signal.direction {
            SignalDirection::Buy => levels.support_distance_pct?,
            SignalDirection::Sell => levels.resistance_distance_pct?,
            SignalDirection::Hold => return None,
        };

        Some(if distance_pct <= SR_NEAR_PCT {
            SR_NEAR_SCORE
        } else if distance_pct >= SR_FAR_PCT {
            SR_FAR_SCORE
        } else {
            let t = (distance_pct - SR_NEAR_PCT) / (SR_FAR_PCT - SR_NEAR_PCT);
            SR_NEAR_SCORE + t * (SR_FAR_SCORE - SR_NEAR_SCORE)
        })
    }

    /// Fixed lookup scoring each (direction, regime) pair.
    fn regime_alignment(&self, direction: SignalDirection, regime: MarketRegime) -> Option<f64> {
        if direction == SignalDirection::Hold {
            return None;
        }
        Some(match (direction, regime) {
            (SignalDirection::Buy, MarketRegime::TrendingUp) => 1.0,
            (SignalDirection::Buy, MarketRegime::TrendingDown) => 0.2,
            (SignalDirection::Buy, MarketRegime::Choppy) => 0.5,
            (SignalDirection::Buy, MarketRegime::HighVolatility) => 0.4,
            (SignalDirection::Buy, MarketRegime::LowVolatility) => 0.8,
            (SignalDirection::Buy, MarketRegime::Crisis) => 0.1,
            (SignalDirection::Sell, MarketRegime::TrendingUp) => 0.2,
            (SignalDirection::Sell, MarketRegime::TrendingDown) => 1.0,
            (SignalDirection::Sell, MarketRegime::Choppy) => 0.5,
            (SignalDirection::Sell, MarketRegime::HighVolatility) => 0.6,
            (SignalDirection::Sell, MarketRegime::LowVolatility) => 0.4,
            (SignalDirection::Sell, MarketRegime::Crisis) => 0.9,
            (SignalDirection::Hold, _) => 0.5,
        })
    }

    /// RSI extremity (up to 0.4) plus MACD crossover confirmation (0.6).
    fn pattern_strength(&self, direction: SignalDirection, daily: &[Candle]) -> Option<f64> {
        let rsi = rsi::calculate_rsi_default(daily)?;
        let macd = macd::calculate_macd_default(daily)?;

        let rsi_component = match direction {
            SignalDirection::Buy => ((50.0 - rsi.value) / 50.0).clamp(0.0, 1.0) * 0.4,
            SignalDirection::Sell => ((rsi.value - 50.0) / 50.0).clamp(0.0, 1.0) * 0.4,
            SignalDirection::Hold => return None,
        };

        let macd_agrees = match direction {
            SignalDirection::Buy => macd.macd > macd.signal,
            SignalDirection::Sell => macd.macd < macd.signal,
            SignalDirection::Hold => false,
        };
        let macd_component = if macd_agrees { 0.6 } else { 0.0 };

        Some((rsi_component + macd_component).min(1.0))
    }
}
