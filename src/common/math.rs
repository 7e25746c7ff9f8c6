//! Shared numeric kernels used by the indicator and sizing layers.
//!
//! Every function returns `Option` on insufficient input rather than
//! panicking; callers translate `None` into their stage defaults.

/// Simple moving average over the most recent `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential moving average seeded with an SMA of the first `period` values.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let mut current = sma(&values[..period], period)?;
    for &value in &values[period..] {
        current = ema_from_previous(value, current, period);
    }
    Some(current)
}

/// Single EMA step from the previous smoothed value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = 2.0 / (period as f64 + 1.0);
    value * alpha + previous * (1.0 - alpha)
}

/// Sample standard deviation over the most recent `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance =
        window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period as f64 - 1.0);
    Some(variance.sqrt())
}

/// True range of a bar given the prior close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// Close-to-close simple returns. Zero closes are skipped.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .filter_map(|w| {
            if w[0] == 0.0 {
                None
            } else {
                Some((w[1] - w[0]) / w[0])
            }
        })
        .collect()
}

/// Annualized volatility of daily returns over the most recent `period` returns.
pub fn annualized_volatility(returns: &[f64], period: usize) -> Option<f64> {
    let sd = standard_deviation(returns, period)?;
    Some(sd * (252.0_f64).sqrt())
}

/// Percentile rank of `value` within `distribution`, in [0, 100].
pub fn percentile_rank(distribution: &[f64], value: f64) -> Option<f64> {
    if distribution.is_empty() {
        return None;
    }
    let below = distribution.iter().filter(|&&v| v <= value).count();
    Some(100.0 * below as f64 / distribution.len() as f64)
}

/// Pearson correlation of two equally long series.
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> Option<f64> {
    let n = a.len().min(b.len());
    if n < 2 {
        return None;
    }
    let a = &a[a.len() - n..];
    let b = &b[b.len() - n..];
    let mean_a = a.iter().sum::<f64>() / n as f64;
    let mean_b = b.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return None;
    }
    Some(cov / (var_a.sqrt() * var_b.sqrt()))
}
