//! Trend following: EMA crossover confirmed by MACD and volume.

use crate::common::math;
use crate::error::EngineError;
use crate::indicators::momentum::macd;
use crate::indicators::trend::ema;
use crate::models::{Candle, SignalDirection, Symbol, TradingSignal};
use crate::regime::RegimeParameters;
use crate::strategies::{SignalStrategy, MIN_CANDLES, TREND_FOLLOWING};
use serde_json::json;

const VOLUME_CONFIRM_RATIO: f64 = 1.05;
const VOLUME_MA_PERIOD: usize = 20;

pub struct TrendFollowingStrategy {
    fast_period: u32,
    slow_period: u32,
}

impl Default for TrendFollowingStrategy {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
        }
    }
}

impl SignalStrategy for TrendFollowingStrategy {
    fn name(&self) -> &'static str {
        TREND_FOLLOWING
    }

    fn generate(
        &self,
        symbol: &Symbol,
        candles: &[Candle],
        _parameters: &RegimeParameters,
    ) -> Result<Option<TradingSignal>, EngineError> {
        if candles.len() < MIN_CANDLES {
            return Ok(None);
        }

        let Some(fast) = ema::calculate_ema(candles, self.fast_period) else {
            return Ok(None);
        };
        let Some(slow) = ema::calculate_ema(candles, self.slow_period) else {
            return Ok(None);
        };
        let Some(macd) = macd::calculate_macd_default(candles) else {
            return Ok(None);
        };

        let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
        let Some(volume_ma) = math::sma(&volumes, VOLUME_MA_PERIOD) else {
            return Ok(None);
        };
        let Some(last) = candles.last() else {
            return Ok(None);
        };
        let volume_confirms = volume_ma > 0.0 && last.volume > VOLUME_CONFIRM_RATIO * volume_ma;

        let direction = if fast.value > slow.value && macd.macd > macd.signal && volume_confirms {
            SignalDirection::Buy
        } else if fast.value < slow.value && macd.macd < macd.signal && volume_confirms {
            SignalDirection::Sell
        } else {
            return Ok(None);
        };

        // Seed confidence from EMA separation; the combiner and analyzer
        // overwrite this downstream.
        let separation = if slow.value != 0.0 {
            ((fast.value - slow.value) / slow.value).abs()
        } else {
            0.0
        };
        let confidence = (0.5 + separation * 10.0).min(0.9);

        let signal = TradingSignal::new(symbol.clone(), direction, last.close, TREND_FOLLOWING, confidence)?
            .with_metadata("ema_fast", json!(fast.value))
            .with_metadata("ema_slow", json!(slow.value))
            .with_metadata("macd", json!(macd.macd))
            .with_metadata("macd_signal", json!(macd.signal))
            .with_metadata("volume_ratio", json!(last.volume / volume_ma));

        Ok(Some(signal))
    }
}
