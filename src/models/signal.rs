//! Trading signals and cycle decisions.

use crate::error::EngineError;
use crate::models::market::Symbol;
use crate::regime::MarketRegime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
}

impl SignalDirection {
    pub fn is_actionable(&self) -> bool {
        !matches!(self, SignalDirection::Hold)
    }

    /// The opposite actionable direction. Hold is its own mirror.
    pub fn opposite(&self) -> SignalDirection {
        match self {
            SignalDirection::Buy => SignalDirection::Sell,
            SignalDirection::Sell => SignalDirection::Buy,
            SignalDirection::Hold => SignalDirection::Hold,
        }
    }
}

impl std::fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalDirection::Buy => write!(f, "BUY"),
            SignalDirection::Sell => write!(f, "SELL"),
            SignalDirection::Hold => write!(f, "HOLD"),
        }
    }
}

/// A directional proposal from one strategy, or the combined vote of several.
///
/// Confidence is validated at construction; a value outside [0, 1] indicates
/// a bug in the producer and is rejected rather than clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSignal {
    pub symbol: Symbol,
    pub direction: SignalDirection,
    pub price: f64,
    pub strategy: String,
    pub confidence: f64,
    pub metadata: HashMap<String, Value>,
}

impl TradingSignal {
    pub fn new(
        symbol: Symbol,
        direction: SignalDirection,
        price: f64,
        strategy: impl Into<String>,
        confidence: f64,
    ) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&confidence) || confidence.is_nan() {
            return Err(EngineError::InvalidSignal(format!(
                "confidence {} outside [0, 1] for {}",
                confidence, symbol
            )));
        }
        Ok(Self {
            symbol,
            direction,
            price,
            strategy: strategy.into(),
            confidence,
            metadata: HashMap::new(),
        })
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Replace the confidence with a rescored value, keeping validation.
    pub fn rescored(mut self, confidence: f64) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&confidence) || confidence.is_nan() {
            return Err(EngineError::InvalidSignal(format!(
                "rescored confidence {} outside [0, 1] for {}",
                confidence, self.symbol
            )));
        }
        self.confidence = confidence;
        Ok(self)
    }
}

/// One actionable entry in the ranked cycle output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub symbol: Symbol,
    pub direction: SignalDirection,
    pub quantity: u64,
    pub confidence: f64,
    pub regime: MarketRegime,
    pub price: f64,
}
