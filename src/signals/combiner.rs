//! Regime-weighted vote reconciling the strategy generators.

use crate::error::EngineError;
use crate::models::{SignalDirection, TradingSignal};
use crate::regime::RegimeParameters;
use serde_json::json;
use tracing::debug;

pub const DEFAULT_CONSENSUS_THRESHOLD: f64 = 0.40;

pub const COMBINED: &str = "combined";

pub struct SignalCombiner {
    consensus_threshold: f64,
}

impl Default for SignalCombiner {
    fn default() -> Self {
        Self {
            consensus_threshold: DEFAULT_CONSENSUS_THRESHOLD,
        }
    }
}

impl SignalCombiner {
    pub fn new(consensus_threshold: f64) -> Self {
        Self {
            consensus_threshold,
        }
    }

    /// Merge candidate signals into at most one combined signal.
    ///
    /// Each strategy's direction contributes its regime weight to a BUY or
    /// SELL accumulator. Shares are normalized over the full strategy weight
    /// table, so an abstaining strategy dilutes consensus. The winning share
    /// seeds the confidence, later overwritten by the analyzer. Ties and
    /// sub-threshold votes produce no signal. The regime's protective stop
    /// and target percents ride along in metadata, together with a
    /// human-readable reason for the vote.
    pub fn combine(
        &self,
        signals: &[TradingSignal],
        parameters: &RegimeParameters,
    ) -> Result<Option<TradingSignal>, EngineError> {
        if signals.is_empty() {
            return Ok(None);
        }

        let total_weight =
            parameters.trend_weight + parameters.mean_reversion_weight + parameters.momentum_weight;
        if total_weight <= 0.0 {
            return Ok(None);
        }

        let mut buy_weight = 0.0;
        let mut sell_weight = 0.0;
        let mut contributors: Vec<(&str, &str, f64)> = Vec::new();

        for signal in signals {
            let weight = parameters.weight_for(&signal.strategy);
            match signal.direction {
                SignalDirection::Buy => buy_weight += weight,
                SignalDirection::Sell => sell_weight += weight,
                SignalDirection::Hold => continue,
            }
            contributors.push((
                signal.strategy.as_str(),
                match signal.direction {
                    SignalDirection::Buy => "BUY",
                    SignalDirection::Sell => "SELL",
                    SignalDirection::Hold => "HOLD",
                },
                weight,
            ));
        }

        let buy_share = buy_weight / total_weight;
        let sell_share = sell_weight / total_weight;

        let (direction, share) = if buy_share > sell_share {
            (SignalDirection::Buy, buy_share)
        } else if sell_share > buy_share {
            (SignalDirection::Sell, sell_share)
        } else {
            debug!(buy = buy_share, sell = sell_share, "combiner tie, no signal");
            return Ok(None);
        };

        if share < self.consensus_threshold {
            debug!(
                share,
                threshold = self.consensus_threshold,
                "consensus below threshold, no signal"
            );
            return Ok(None);
        }

        // Anchor symbol and price on the first signal agreeing with the vote.
        let Some(anchor) = signals.iter().find(|s| s.direction == direction) else {
            return Ok(None);
        };

        let combined = TradingSignal::new(
            anchor.symbol.clone(),
            direction,
            anchor.price,
            COMBINED,
            share.min(1.0),
        )?
        .with_metadata("origin_strategy", json!(anchor.strategy.clone()))
        .with_metadata("buy_share", json!(buy_share))
        .with_metadata("sell_share", json!(sell_share))
        .with_metadata("stop_loss_pct", json!(parameters.stop_loss_pct))
        .with_metadata("take_profit_pct", json!(parameters.take_profit_pct))
        .with_metadata(
            "reason",
            json!(format!(
                "{} consensus at {:.0}% of strategy weight, anchored by {}",
                direction,
                share * 100.0,
                anchor.strategy
            )),
        )
        .with_metadata(
            "contributors",
            json!(contributors
                .iter()
                .map(|(name, dir, w)| json!({ "strategy": name, "direction": dir, "weight": w }))
                .collect::<Vec<_>>()),
        );

        Ok(Some(combined))
    }
}
