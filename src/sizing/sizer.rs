//! Layered position sizing: Kelly base, volatility and correlation
//! adjustment, regime multiplier, confidence boost, safety caps.
//!
//! Every stage is bounded; numeric breakdowns degrade to the conservative
//! floor instead of propagating.

use crate::common::math;
use crate::models::{PortfolioSnapshot, TradingSignal};
use crate::regime::RegimeParameters;
use crate::sizing::stats::KellyInputs;
use std::collections::HashMap;
use tracing::debug;

const VOL_WINDOW: usize = 20;
const CORRELATION_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct SizerConfig {
    pub kelly_floor: f64,
    pub kelly_cap: f64,
    pub target_volatility: f64,
    pub correlation_ceiling: f64,
    pub max_position_fraction: f64,
    pub min_notional: f64,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            kelly_floor: 0.01,
            kelly_cap: 0.40,
            target_volatility: 0.20,
            correlation_ceiling: 0.65,
            max_position_fraction: 0.25,
            min_notional: 500.0,
        }
    }
}

/// Everything one sizing call needs, assembled by the engine.
pub struct SizingContext<'a> {
    pub signal: &'a TradingSignal,
    pub confidence: f64,
    pub parameters: &'a RegimeParameters,
    pub portfolio: &'a PortfolioSnapshot,
    pub kelly: KellyInputs,
    /// Daily returns of the candidate symbol, most recent last.
    pub symbol_returns: &'a [f64],
    /// Daily returns of currently held symbols, for the correlation stage.
    pub held_returns: &'a HashMap<String, Vec<f64>>,
}

pub struct PositionSizer {
    config: SizerConfig,
}

impl Default for PositionSizer {
    fn default() -> Self {
        Self {
            config: SizerConfig::default(),
        }
    }
}

impl PositionSizer {
    pub fn new(config: SizerConfig) -> Self {
        Self { config }
    }

    /// Convert a scored signal into a bounded share quantity, never negative.
    pub fn size(&self, ctx: &SizingContext<'_>) -> u64 {
        if ctx.signal.price <= 0.0 || ctx.portfolio.equity <= 0.0 {
            return 0;
        }

        let kelly_fraction = self.kelly_fraction(&ctx.kelly, ctx.confidence);
        let mut notional = ctx.portfolio.equity * kelly_fraction;

        notional *= self.volatility_adjustment(ctx.symbol_returns, ctx.confidence);
        notional *= self.correlation_adjustment(ctx);
        notional *= ctx.parameters.position_size_multiplier;
        notional *= self.confidence_boost(ctx.confidence);

        let shares = self.apply_caps(notional, ctx);
        debug!(
            symbol = %ctx.signal.symbol,
            kelly_fraction,
            notional,
            shares,
            "position sized"
        );
        shares
    }

    /// Fractional Kelly with the win rate nudged toward the signal's
    /// confidence, clamped to [floor, cap] of equity.
    fn kelly_fraction(&self, kelly: &KellyInputs, confidence: f64) -> f64 {
        if kelly.avg_loss <= 0.0 || kelly.avg_win <= 0.0 {
            // Division by zero in b; conservative floor instead of an error.
            return self.config.kelly_floor;
        }
        let b = kelly.avg_win / kelly.avg_loss;
        let p = (kelly.win_rate * (0.7 + 0.3 * confidence)).clamp(0.0, 1.0);
        let q = 1.0 - p;
        let raw = (b * p - q) / b;
        raw.clamp(self.config.kelly_floor, self.config.kelly_cap)
    }

    /// target_vol / realized_vol, bounded to [0.3, 2.0], with a steeper
    /// penalty when volatility is high and confidence is low.
    fn volatility_adjustment(&self, symbol_returns: &[f64], confidence: f64) -> f64 {
        let Some(symbol_vol) = math::annualized_volatility(symbol_returns, VOL_WINDOW) else {
            return 1.0;
        };
        if symbol_vol <= 0.0 {
            return 1.0;
        }
        let mut factor = (self.config.target_volatility / symbol_vol).clamp(0.3, 2.0);
        if symbol_vol > self.config.target_volatility && confidence < 0.6 {
            factor = (factor * 0.8).max(0.3);
        }
        factor
    }

    /// Average |correlation| against held symbols over 60-day returns.
    /// Shrinks proportionally above the ceiling, small diversification bonus
    /// below it, capped at 1.2.
    fn correlation_adjustment(&self, ctx: &SizingContext<'_>) -> f64 {
        let mut correlations = Vec::new();
        for ticker in ctx.portfolio.positions.keys() {
            if *ticker == ctx.signal.symbol.ticker {
                continue;
            }
            let Some(held) = ctx.held_returns.get(ticker) else {
                continue;
            };
            let n = ctx.symbol_returns.len().min(held.len()).min(CORRELATION_WINDOW);
            if n < 2 {
                continue;
            }
            let a = &ctx.symbol_returns[ctx.symbol_returns.len() - n..];
            let b = &held[held.len() - n..];
            if let Some(corr) = math::pearson_correlation(a, b) {
                correlations.push(corr.abs());
            }
        }

        if correlations.is_empty() {
            return 1.0;
        }
        let average = correlations.iter().sum::<f64>() / correlations.len() as f64;

        if average > self.config.correlation_ceiling {
            (self.config.correlation_ceiling / average).max(0.1)
        } else {
            let headroom = (self.config.correlation_ceiling - average) / self.config.correlation_ceiling;
            (1.0 + headroom * 0.2).min(1.2)
        }
    }

    /// Up to 1.3x for confidence above 0.8.
    fn confidence_boost(&self, confidence: f64) -> f64 {
        if confidence > 0.8 {
            1.0 + ((confidence - 0.8) / 0.2).min(1.0) * 0.3
        } else {
            1.0
        }
    }

    /// Clamp to cash and the equity fraction cap; positions below the minimum
    /// notional are rounded up when cash allows, otherwise dropped to zero.
    fn apply_caps(&self, notional: f64, ctx: &SizingContext<'_>) -> u64 {
        let equity_cap = ctx.portfolio.equity * self.config.max_position_fraction;
        let hard_cap = ctx.portfolio.cash.min(equity_cap);
        let mut capped = notional.min(hard_cap);

        if capped < self.config.min_notional {
            if hard_cap >= self.config.min_notional {
                capped = self.config.min_notional;
            } else {
                return 0;
            }
        }

        let shares = (capped / ctx.signal.price).floor();
        if shares.is_sign_negative() || !shares.is_finite() {
            return 0;
        }
        shares as u64
    }
}
