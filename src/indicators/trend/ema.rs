//! EMA (Exponential Moving Average) and crossover checks.

use crate::common::math;
use crate::models::{Candle, EmaIndicator};

/// Calculate the EMA of closes for one period.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    if candles.len() < period as usize {
        return None;
    }
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let value = math::ema(&closes, period as usize)?;
    Some(EmaIndicator { value, period })
}

/// Relative state of a fast EMA against a slow EMA: +1 above, -1 below, 0 equal.
pub fn ema_cross_state(candles: &[Candle], fast_period: u32, slow_period: u32) -> Option<i32> {
    let fast = calculate_ema(candles, fast_period)?;
    let slow = calculate_ema(candles, slow_period)?;
    if fast.value > slow.value {
        Some(1)
    } else if fast.value < slow.value {
        Some(-1)
    } else {
        Some(0)
    }
}

/// Same crossover state computed from a simple moving average, used by the
/// multi-timeframe confidence check where smoothing lag is acceptable.
pub fn sma_cross_state(candles: &[Candle], fast_period: u32, slow_period: u32) -> Option<i32> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let fast = math::sma(&closes, fast_period as usize)?;
    let slow = math::sma(&closes, slow_period as usize)?;
    if fast > slow {
        Some(1)
    } else if fast < slow {
        Some(-1)
    } else {
        Some(0)
    }
}
