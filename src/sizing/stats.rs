//! Per-strategy trade statistics feeding the Kelly stage.

use std::collections::HashMap;
use std::sync::RwLock;

/// Closed trades below this count fall back to conservative defaults.
pub const MIN_CLOSED_TRADES: usize = 10;

/// The numbers the Kelly formula consumes. Magnitudes are fractional returns
/// per trade, always positive.
#[derive(Debug, Clone, Copy)]
pub struct KellyInputs {
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
}

impl KellyInputs {
    /// Deliberately pessimistic defaults for strategies without a track record.
    pub fn conservative() -> Self {
        Self {
            win_rate: 0.45,
            avg_win: 0.06,
            avg_loss: 0.04,
        }
    }
}

#[derive(Debug, Default, Clone)]
struct StrategyRecord {
    wins: usize,
    losses: usize,
    total_win: f64,
    total_loss: f64,
}

impl StrategyRecord {
    fn closed(&self) -> usize {
        self.wins + self.losses
    }

    fn inputs(&self) -> Option<KellyInputs> {
        if self.closed() < MIN_CLOSED_TRADES || self.wins == 0 || self.losses == 0 {
            return None;
        }
        Some(KellyInputs {
            win_rate: self.wins as f64 / self.closed() as f64,
            avg_win: self.total_win / self.wins as f64,
            avg_loss: self.total_loss / self.losses as f64,
        })
    }
}

/// Historical performance per strategy name. Written by the orchestration
/// layer when trades close; read by the sizer.
#[derive(Default)]
pub struct PerformanceBook {
    records: RwLock<HashMap<String, StrategyRecord>>,
}

impl PerformanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one closed trade's fractional return (negative for a loss).
    pub fn record_trade(&self, strategy: &str, fractional_return: f64) {
        if let Ok(mut records) = self.records.write() {
            let record = records.entry(strategy.to_string()).or_default();
            if fractional_return >= 0.0 {
                record.wins += 1;
                record.total_win += fractional_return;
            } else {
                record.losses += 1;
                record.total_loss += fractional_return.abs();
            }
        }
    }

    /// Kelly inputs for a strategy, falling back to conservative defaults
    /// when there is not enough history.
    pub fn kelly_inputs(&self, strategy: &str) -> KellyInputs {
        self.records
            .read()
            .ok()
            .and_then(|records| records.get(strategy).and_then(StrategyRecord::inputs))
            .unwrap_or_else(KellyInputs::conservative)
    }

    pub fn closed_trades(&self, strategy: &str) -> usize {
        self.records
            .read()
            .ok()
            .and_then(|records| records.get(strategy).map(StrategyRecord::closed))
            .unwrap_or(0)
    }
}
