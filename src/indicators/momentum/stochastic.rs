//! Stochastic oscillator (%K / %D).

use crate::common::math;
use crate::models::{Candle, StochasticIndicator};

/// Calculate the stochastic oscillator.
///
/// %K = 100 * (close - lowest low) / (highest high - lowest low) over
/// `k_period` bars; %D is the `d_period` SMA of the %K series.
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: u32,
    d_period: u32,
) -> Option<StochasticIndicator> {
    let k_len = k_period as usize;
    let d_len = d_period as usize;
    if k_len == 0 || d_len == 0 || candles.len() < k_len + d_len - 1 {
        return None;
    }

    let mut k_values = Vec::with_capacity(d_len);
    for end in (candles.len() - d_len + 1)..=candles.len() {
        let window = &candles[end - k_len..end];
        let lowest = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
        let highest = window
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = highest - lowest;
        let close = window.last()?.close;
        let k = if range > 0.0 {
            100.0 * (close - lowest) / range
        } else {
            50.0
        };
        k_values.push(k);
    }

    let k = *k_values.last()?;
    let d = math::sma(&k_values, d_len)?;

    Some(StochasticIndicator {
        k,
        d,
        k_period,
        d_period,
    })
}

/// Stochastic with the conventional (14, 3) periods.
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3)
}
