//! Regime-conditioned parameter bundles.
//!
//! Hand-tuned defaults; treat them as configuration, not constants with a
//! derivation behind them.

use crate::regime::MarketRegime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeParameters {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
    /// Combination weights per strategy; normalized during the vote, so they
    /// only need to be proportional.
    pub trend_weight: f64,
    pub mean_reversion_weight: f64,
    pub momentum_weight: f64,
    pub position_size_multiplier: f64,
    pub min_confidence: f64,
}

impl RegimeParameters {
    /// Pure table lookup; never fails.
    pub fn for_regime(regime: MarketRegime) -> Self {
        match regime {
            MarketRegime::TrendingUp => Self {
                rsi_oversold: 35.0,
                rsi_overbought: 75.0,
                stop_loss_pct: 0.03,
                take_profit_pct: 0.08,
                trend_weight: 0.55,
                mean_reversion_weight: 0.20,
                momentum_weight: 0.25,
                position_size_multiplier: 1.2,
                min_confidence: 0.55,
            },
            MarketRegime::TrendingDown => Self {
                rsi_oversold: 25.0,
                rsi_overbought: 65.0,
                stop_loss_pct: 0.03,
                take_profit_pct: 0.08,
                trend_weight: 0.55,
                mean_reversion_weight: 0.20,
                momentum_weight: 0.25,
                position_size_multiplier: 0.8,
                min_confidence: 0.60,
            },
            MarketRegime::Choppy => Self {
                rsi_oversold: 30.0,
                rsi_overbought: 70.0,
                stop_loss_pct: 0.02,
                take_profit_pct: 0.04,
                trend_weight: 0.20,
                mean_reversion_weight: 0.55,
                momentum_weight: 0.25,
                position_size_multiplier: 0.8,
                min_confidence: 0.60,
            },
            MarketRegime::HighVolatility => Self {
                rsi_oversold: 25.0,
                rsi_overbought: 75.0,
                stop_loss_pct: 0.04,
                take_profit_pct: 0.06,
                trend_weight: 0.30,
                mean_reversion_weight: 0.40,
                momentum_weight: 0.30,
                position_size_multiplier: 0.5,
                min_confidence: 0.65,
            },
            MarketRegime::LowVolatility => Self {
                rsi_oversold: 30.0,
                rsi_overbought: 70.0,
                stop_loss_pct: 0.015,
                take_profit_pct: 0.04,
                trend_weight: 0.40,
                mean_reversion_weight: 0.35,
                momentum_weight: 0.25,
                position_size_multiplier: 1.2,
                min_confidence: 0.50,
            },
            MarketRegime::Crisis => Self {
                rsi_oversold: 20.0,
                rsi_overbought: 80.0,
                stop_loss_pct: 0.05,
                take_profit_pct: 0.05,
                trend_weight: 0.25,
                mean_reversion_weight: 0.40,
                momentum_weight: 0.35,
                position_size_multiplier: 0.3,
                min_confidence: 0.70,
            },
        }
    }

    pub fn weight_for(&self, strategy: &str) -> f64 {
        match strategy {
            crate::strategies::TREND_FOLLOWING => self.trend_weight,
            crate::strategies::MEAN_REVERSION => self.mean_reversion_weight,
            crate::strategies::MOMENTUM => self.momentum_weight,
            _ => 0.0,
        }
    }
}
