//! ROC (Rate of Change).

use crate::models::{Candle, RocIndicator};

/// Percentage change of the close against the close `period` bars ago.
pub fn calculate_roc(candles: &[Candle], period: u32) -> Option<RocIndicator> {
    let period = period as usize;
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let current = candles.last()?.close;
    let past = candles[candles.len() - 1 - period].close;
    if past == 0.0 {
        return None;
    }

    Some(RocIndicator {
        value: 100.0 * (current - past) / past,
        period: period as u32,
    })
}

/// ROC with the conventional 20 period.
pub fn calculate_roc_default(candles: &[Candle]) -> Option<RocIndicator> {
    calculate_roc(candles, 20)
}
