//! MACD (Moving Average Convergence Divergence).

use crate::common::math;
use crate::models::{Candle, MacdIndicator};

/// Calculate MACD, signal line and histogram.
///
/// MACD = EMA(fast) - EMA(slow); Signal = EMA(signal_period) of the MACD
/// series; Histogram = MACD - Signal.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    let fast = fast_period as usize;
    let slow = slow_period as usize;
    let sig = signal_period as usize;
    if fast == 0 || slow <= fast || candles.len() < slow + sig {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    // Build the MACD series incrementally so the signal line has history.
    let mut fast_ema = math::sma(&closes[..fast], fast)?;
    let mut slow_ema = math::sma(&closes[..slow], slow)?;
    let mut macd_values = Vec::new();

    for i in fast..closes.len() {
        fast_ema = math::ema_from_previous(closes[i], fast_ema, fast);
        if i >= slow {
            slow_ema = math::ema_from_previous(closes[i], slow_ema, slow);
            macd_values.push(fast_ema - slow_ema);
        }
    }

    if macd_values.len() < sig {
        return None;
    }

    let macd_line = *macd_values.last()?;
    let signal_line = math::ema(&macd_values, sig)?;

    Some(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
        period: (fast_period, slow_period, signal_period),
    })
}

/// MACD with the conventional (12, 26, 9) periods.
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
