//! Mean reversion: RSI extremes plus Bollinger band position, 2-of-3 vote.

use crate::error::EngineError;
use crate::indicators::momentum::rsi;
use crate::indicators::volatility::bollinger;
use crate::models::{Candle, SignalDirection, Symbol, TradingSignal};
use crate::regime::RegimeParameters;
use crate::strategies::{SignalStrategy, MEAN_REVERSION, MIN_CANDLES};
use serde_json::json;

const BAND_EDGE_FRACTION: f64 = 0.2;
const REQUIRED_CONDITIONS: usize = 2;

#[derive(Default)]
pub struct MeanReversionStrategy;

impl SignalStrategy for MeanReversionStrategy {
    fn name(&self) -> &'static str {
        MEAN_REVERSION
    }

    fn generate(
        &self,
        symbol: &Symbol,
        candles: &[Candle],
        parameters: &RegimeParameters,
    ) -> Result<Option<TradingSignal>, EngineError> {
        if candles.len() < MIN_CANDLES {
            return Ok(None);
        }

        let Some(rsi) = rsi::calculate_rsi_default(candles) else {
            return Ok(None);
        };
        let Some(bands) = bollinger::calculate_bollinger_bands_default(candles) else {
            return Ok(None);
        };
        let Some(last) = candles.last() else {
            return Ok(None);
        };

        let price = last.close;
        let band_position = bands.band_position(price);

        // Oversold thresholds come regime-adjusted from the parameter bundle.
        let buy_conditions = [
            rsi.value < parameters.rsi_oversold,
            band_position <= BAND_EDGE_FRACTION,
            price < bands.middle,
        ]
        .iter()
        .filter(|c| **c)
        .count();

        let sell_conditions = [
            rsi.value > parameters.rsi_overbought,
            band_position >= 1.0 - BAND_EDGE_FRACTION,
            price > bands.middle,
        ]
        .iter()
        .filter(|c| **c)
        .count();

        let (direction, agreeing) = if buy_conditions >= REQUIRED_CONDITIONS
            && buy_conditions > sell_conditions
        {
            (SignalDirection::Buy, buy_conditions)
        } else if sell_conditions >= REQUIRED_CONDITIONS && sell_conditions > buy_conditions {
            (SignalDirection::Sell, sell_conditions)
        } else {
            return Ok(None);
        };

        let confidence = match agreeing {
            3 => 0.75,
            _ => 0.55,
        };

        let signal = TradingSignal::new(symbol.clone(), direction, price, MEAN_REVERSION, confidence)?
            .with_metadata("rsi", json!(rsi.value))
            .with_metadata("band_position", json!(band_position))
            .with_metadata("bollinger_middle", json!(bands.middle))
            .with_metadata("conditions_met", json!(agreeing));

        Ok(Some(signal))
    }
}
