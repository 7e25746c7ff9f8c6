//! ATR (Average True Range).

use crate::common::math;
use crate::models::{AtrIndicator, Candle};

/// Average of the true range over `period` bars.
pub fn calculate_atr(candles: &[Candle], period: u32) -> Option<AtrIndicator> {
    let len = period as usize;
    if len == 0 || candles.len() < len + 1 {
        return None;
    }

    let tr_values: Vec<f64> = candles
        .windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect();

    let value = math::sma(&tr_values, len)?;
    Some(AtrIndicator { value, period })
}

/// ATR with the conventional 14 period.
pub fn calculate_atr_default(candles: &[Candle]) -> Option<AtrIndicator> {
    calculate_atr(candles, 14)
}
