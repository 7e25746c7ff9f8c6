//! Unit tests for the shared numeric kernels.

use approx::assert_relative_eq;
use quantrix::common::math;

#[test]
fn sma_averages_the_most_recent_window() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_relative_eq!(math::sma(&values, 2).unwrap(), 4.5);
    assert_relative_eq!(math::sma(&values, 5).unwrap(), 3.0);
}

#[test]
fn sma_returns_none_on_short_input() {
    assert!(math::sma(&[1.0, 2.0], 3).is_none());
    assert!(math::sma(&[1.0], 0).is_none());
}

#[test]
fn ema_of_constant_series_is_the_constant() {
    let values = vec![5.0; 40];
    assert_relative_eq!(math::ema(&values, 10).unwrap(), 5.0);
}

#[test]
fn ema_tracks_rising_values_above_the_early_mean() {
    let values: Vec<f64> = (0..40).map(|i| i as f64).collect();
    let ema = math::ema(&values, 10).unwrap();
    let sma = math::sma(&values, 40).unwrap();
    assert!(ema > sma, "EMA {} should lead the full-series mean {}", ema, sma);
}

#[test]
fn standard_deviation_of_constant_series_is_zero() {
    let values = vec![3.0; 25];
    assert_relative_eq!(math::standard_deviation(&values, 20).unwrap(), 0.0);
}

#[test]
fn standard_deviation_matches_hand_computation() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    // Sample variance of this classic set is 32/7.
    assert_relative_eq!(
        math::standard_deviation(&values, 8).unwrap(),
        (32.0_f64 / 7.0).sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn true_range_covers_gaps() {
    // Gap down: previous close far above today's range.
    assert_relative_eq!(math::true_range(10.0, 9.0, 12.0), 3.0);
    // Normal bar: plain high-low range.
    assert_relative_eq!(math::true_range(10.0, 9.0, 9.5), 1.0);
}

#[test]
fn simple_returns_skip_zero_closes() {
    let closes = [100.0, 110.0, 0.0, 50.0];
    let returns = math::simple_returns(&closes);
    assert_eq!(returns.len(), 2);
    assert_relative_eq!(returns[0], 0.1);
}

#[test]
fn percentile_rank_brackets_the_distribution() {
    let dist = [1.0, 2.0, 3.0, 4.0];
    assert_relative_eq!(math::percentile_rank(&dist, 4.0).unwrap(), 100.0);
    assert_relative_eq!(math::percentile_rank(&dist, 0.5).unwrap(), 0.0);
    assert_relative_eq!(math::percentile_rank(&dist, 2.0).unwrap(), 50.0);
}

#[test]
fn pearson_correlation_of_identical_series_is_one() {
    let series: Vec<f64> = (0..30).map(|i| (i as f64).sin()).collect();
    assert_relative_eq!(
        math::pearson_correlation(&series, &series).unwrap(),
        1.0,
        epsilon = 1e-9
    );
}

#[test]
fn pearson_correlation_of_mirrored_series_is_minus_one() {
    let a: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let b: Vec<f64> = (0..30).map(|i| -(i as f64)).collect();
    assert_relative_eq!(math::pearson_correlation(&a, &b).unwrap(), -1.0, epsilon = 1e-9);
}

#[test]
fn pearson_correlation_rejects_flat_series() {
    let a = vec![1.0; 10];
    let b: Vec<f64> = (0..10).map(|i| i as f64).collect();
    assert!(math::pearson_correlation(&a, &b).is_none());
}

#[test]
fn annualized_volatility_scales_daily_stddev() {
    let returns = vec![0.01, -0.01].repeat(15);
    let sd = math::standard_deviation(&returns, 20).unwrap();
    assert_relative_eq!(
        math::annualized_volatility(&returns, 20).unwrap(),
        sd * 252.0_f64.sqrt()
    );
}
