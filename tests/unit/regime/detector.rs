//! Unit tests for regime detection.

use crate::test_helpers::{
    crisis_candles, downtrend_candles, symbol, uptrend_candles, volatility_spike_candles,
};
use quantrix::regime::{MarketRegime, RegimeDetector, RegimeParameters};
use std::time::Duration;

fn detector() -> RegimeDetector {
    RegimeDetector::new(Duration::from_secs(900))
}

#[test]
fn sustained_uptrend_classifies_trending_up() {
    let regime = detector().detect(&symbol("UP"), &uptrend_candles(150), None);
    assert_eq!(regime, MarketRegime::TrendingUp);
}

#[test]
fn sustained_downtrend_classifies_trending_down() {
    let regime = detector().detect(&symbol("DN"), &downtrend_candles(150), None);
    assert_eq!(regime, MarketRegime::TrendingDown);
}

#[test]
fn insufficient_history_defaults_to_choppy() {
    let regime = detector().detect(&symbol("SHORT"), &uptrend_candles(40), None);
    assert_eq!(regime, MarketRegime::Choppy);
}

#[test]
fn repeated_large_daily_moves_classify_crisis() {
    let regime = detector().detect(&symbol("CRASH"), &crisis_candles(150), None);
    assert_eq!(regime, MarketRegime::Crisis);
}

#[test]
fn stress_index_spike_classifies_crisis_even_on_calm_bars() {
    let regime = detector().detect(&symbol("VIX"), &uptrend_candles(150), Some(55.0));
    assert_eq!(regime, MarketRegime::Crisis);
}

#[test]
fn volatility_burst_without_stress_days_classifies_high_volatility() {
    let regime = detector().detect(&symbol("WILD"), &volatility_spike_candles(300), None);
    assert_eq!(regime, MarketRegime::HighVolatility);
}

#[test]
fn cache_returns_the_previous_classification_within_ttl() {
    let detector = detector();
    let sym = symbol("CACHED");
    let first = detector.detect(&sym, &uptrend_candles(150), None);
    assert_eq!(first, MarketRegime::TrendingUp);

    // Same symbol, contradictory bars: the cached value wins inside the TTL.
    let second = detector.detect(&sym, &downtrend_candles(150), None);
    assert_eq!(second, MarketRegime::TrendingUp);

    detector.invalidate_cache();
    let third = detector.detect(&sym, &downtrend_candles(150), None);
    assert_eq!(third, MarketRegime::TrendingDown);
}

#[test]
fn expired_ttl_forces_recomputation() {
    let detector = RegimeDetector::new(Duration::from_millis(0));
    let sym = symbol("STALE");
    assert_eq!(
        detector.detect(&sym, &uptrend_candles(150), None),
        MarketRegime::TrendingUp
    );
    std::thread::sleep(Duration::from_millis(5));
    assert_eq!(
        detector.detect(&sym, &downtrend_candles(150), None),
        MarketRegime::TrendingDown
    );
}

#[test]
fn parameter_lookup_covers_every_regime() {
    let detector = detector();
    for regime in [
        MarketRegime::TrendingUp,
        MarketRegime::TrendingDown,
        MarketRegime::Choppy,
        MarketRegime::HighVolatility,
        MarketRegime::LowVolatility,
        MarketRegime::Crisis,
    ] {
        let params = detector.parameters(regime);
        let total =
            params.trend_weight + params.mean_reversion_weight + params.momentum_weight;
        assert!((total - 1.0).abs() < 1e-9, "weights for {regime} should sum to 1");
        assert!(params.position_size_multiplier > 0.0);
    }
}

#[test]
fn crisis_multiplier_is_the_most_defensive() {
    let crisis = RegimeParameters::for_regime(MarketRegime::Crisis);
    let trending = RegimeParameters::for_regime(MarketRegime::TrendingUp);
    assert!(crisis.position_size_multiplier < trending.position_size_multiplier);
    assert!(crisis.min_confidence > trending.min_confidence);
}
