//! TTL cache for regime classifications.
//!
//! Keyed by symbol only, not by the exact bar set; a stale entry can
//! momentarily misclassify a fast-moving market, which is the accepted
//! latency/accuracy trade-off. Writes come only from the owning detection
//! call; last-writer-wins is fine under the short TTL.

use crate::models::Symbol;
use crate::regime::MarketRegime;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

pub struct RegimeCache {
    entries: RwLock<HashMap<Symbol, (MarketRegime, Instant)>>,
    ttl: Duration,
}

impl RegimeCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Fresh cached value for `symbol`, or `None` when absent or expired.
    pub fn get(&self, symbol: &Symbol) -> Option<MarketRegime> {
        let entries = self.entries.read().ok()?;
        let (regime, stored_at) = entries.get(symbol)?;
        if stored_at.elapsed() > self.ttl {
            return None;
        }
        Some(*regime)
    }

    pub fn insert(&self, symbol: Symbol, regime: MarketRegime) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(symbol, (regime, Instant::now()));
        }
    }

    /// Drop every cached classification, forcing recomputation.
    pub fn invalidate_all(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
