//! Momentum: rate-of-change, stochastic cross and short-term momentum must
//! all agree in direction.

use crate::error::EngineError;
use crate::indicators::momentum::{roc, stochastic};
use crate::models::{Candle, SignalDirection, Symbol, TradingSignal};
use crate::regime::RegimeParameters;
use crate::strategies::{SignalStrategy, MIN_CANDLES, MOMENTUM};
use serde_json::json;

const SHORT_MOMENTUM_BARS: usize = 5;

#[derive(Default)]
pub struct MomentumStrategy;

impl SignalStrategy for MomentumStrategy {
    fn name(&self) -> &'static str {
        MOMENTUM
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

        let Some(roc) = roc::calculate_roc_default(candles) else {
            return Ok(None);
        };
        let Some(stoch) = stochastic::calculate_stochastic_default(candles) else {
            return Ok(None);
        };
        let Some(last) = candles.last() else {
            return Ok(None);
        };
        if candles.len() < SHORT_MOMENTUM_BARS + 1 {
            return Ok(None);
        }
        let short_base = candles[candles.len() - 1 - SHORT_MOMENTUM_BARS].close;

        let direction = if roc.value > 0.0 && stoch.k > stoch.d && last.close > short_base {
            SignalDirection::Buy
        } else if roc.value < 0.0 && stoch.k < stoch.d && last.close < short_base {
            SignalDirection::Sell
        } else {
            return Ok(None);
        };

        let confidence = (0.5 + (roc.value.abs() / 100.0)).min(0.85);

        let signal = TradingSignal::new(symbol.clone(), direction, last.close, MOMENTUM, confidence)?
            .with_metadata("roc", json!(roc.value))
            .with_metadata("stochastic_k", json!(stoch.k))
            .with_metadata("stochastic_d", json!(stoch.d))
            .with_metadata(
                "short_momentum_pct",
                json!(if short_base != 0.0 {
                    100.0 * (last.close - short_base) / short_base
                } else {
                    0.0
                }),
            );

        Ok(Some(signal))
    }
}
