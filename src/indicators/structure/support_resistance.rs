//! Support and resistance levels from local extrema.

use crate::models::{Candle, SupportResistanceIndicator};

const PIVOT_WING: usize = 2;

/// Locate the nearest support below and resistance above the current price.
///
/// A pivot low is a bar whose low undercuts the `PIVOT_WING` bars on either
/// side; pivot highs are the mirror. The nearest qualifying pivot on each
/// side of the price becomes the level.
pub fn calculate_support_resistance(
    candles: &[Candle],
    lookback: usize,
    current_price: f64,
) -> Option<SupportResistanceIndicator> {
    if current_price <= 0.0 || candles.len() < PIVOT_WING * 2 + 1 {
        return None;
    }

    let start = candles.len().saturating_sub(lookback);
    let window = &candles[start..];

    let mut supports = Vec::new();
    let mut resistances = Vec::new();
    for i in PIVOT_WING..window.len().saturating_sub(PIVOT_WING) {
        let low = window[i].low;
        let high = window[i].high;
        let wings = window[i - PIVOT_WING..i]
            .iter()
            .chain(&window[i + 1..=i + PIVOT_WING]);

        let mut is_pivot_low = true;
        let mut is_pivot_high = true;
        for neighbor in wings {
            if neighbor.low <= low {
                is_pivot_low = false;
            }
            if neighbor.high >= high {
                is_pivot_high = false;
            }
        }
        if is_pivot_low && low < current_price {
            supports.push(low);
        }
        if is_pivot_high && high > current_price {
            resistances.push(high);
        }
    }

    let support_level = supports.into_iter().fold(None, |best: Option<f64>, s| {
        Some(best.map_or(s, |b| b.max(s)))
    });
    let resistance_level = resistances.into_iter().fold(None, |best: Option<f64>, r| {
        Some(best.map_or(r, |b| b.min(r)))
    });

    let support_distance_pct =
        support_level.map(|s| 100.0 * (current_price - s) / current_price);
    let resistance_distance_pct =
        resistance_level.map(|r| 100.0 * (r - current_price) / current_price);

    Some(SupportResistanceIndicator {
        support_level,
        resistance_level,
        support_distance_pct,
        resistance_distance_pct,
    })
}

/// Support/resistance over the conventional 50-bar lookback.
pub fn calculate_support_resistance_default(
    candles: &[Candle],
    current_price: f64,
) -> Option<SupportResistanceIndicator> {
    calculate_support_resistance(candles, 50, current_price)
}
