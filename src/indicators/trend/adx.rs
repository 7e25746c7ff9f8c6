//! ADX (Average Directional Index) with +DI / -DI.

use crate::common::math;
use crate::models::{AdxIndicator, Candle};

/// Calculate ADX and the directional indicators.
///
/// Trend strength is direction-agnostic; the DI pair carries the direction.
/// Needs roughly two periods of history so the DX series can be smoothed.
pub fn calculate_adx(candles: &[Candle], period: u32) -> Option<AdxIndicator> {
    let len = period as usize;
    if len == 0 || candles.len() < 2 * len + 1 {
        return None;
    }

    let mut tr_values = Vec::with_capacity(candles.len() - 1);
    let mut plus_dm_values = Vec::with_capacity(candles.len() - 1);
    let mut minus_dm_values = Vec::with_capacity(candles.len() - 1);

    for pair in candles.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        tr_values.push(math::true_range(curr.high, curr.low, prev.close));

        let up_move = curr.high - prev.high;
        let down_move = prev.low - curr.low;
        plus_dm_values.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm_values.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    // Build a DX series so ADX is a true smoothing, not a single sample.
    let mut dx_values = Vec::new();
    let mut last_plus_di = 0.0;
    let mut last_minus_di = 0.0;
    for end in len..=tr_values.len() {
        let tr_sum: f64 = tr_values[end - len..end].iter().sum();
        if tr_sum <= 0.0 {
            dx_values.push(0.0);
            continue;
        }
        let plus_di = 100.0 * plus_dm_values[end - len..end].iter().sum::<f64>() / tr_sum;
        let minus_di = 100.0 * minus_dm_values[end - len..end].iter().sum::<f64>() / tr_sum;
        last_plus_di = plus_di;
        last_minus_di = minus_di;

        let di_sum = plus_di + minus_di;
        dx_values.push(if di_sum > 0.0 {
            100.0 * (plus_di - minus_di).abs() / di_sum
        } else {
            0.0
        });
    }

    let value = math::ema(&dx_values, len)?;

    Some(AdxIndicator {
        value,
        plus_di: last_plus_di,
        minus_di: last_minus_di,
        period,
    })
}

/// ADX with the conventional 14 period.
pub fn calculate_adx_default(candles: &[Candle]) -> Option<AdxIndicator> {
    calculate_adx(candles, 14)
}
