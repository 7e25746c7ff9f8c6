//! Unit tests for the regime-weighted signal combiner.

use crate::test_helpers::symbol;
use approx::assert_relative_eq;
use quantrix::models::{SignalDirection, TradingSignal};
use quantrix::regime::{MarketRegime, RegimeParameters};
use quantrix::signals::SignalCombiner;
use quantrix::strategies::{MEAN_REVERSION, MOMENTUM, TREND_FOLLOWING};

fn signal(strategy: &str, direction: SignalDirection) -> TradingSignal {
    TradingSignal::new(symbol("TEST"), direction, 100.0, strategy, 0.6).unwrap()
}

#[test]
fn unanimous_buy_wins_with_full_share() {
    let signals = vec![
        signal(TREND_FOLLOWING, SignalDirection::Buy),
        signal(MEAN_REVERSION, SignalDirection::Buy),
        signal(MOMENTUM, SignalDirection::Buy),
    ];
    let params = RegimeParameters::for_regime(MarketRegime::TrendingUp);
    let combined = SignalCombiner::default()
        .combine(&signals, &params)
        .unwrap()
        .expect("unanimous vote should produce a signal");
    assert_eq!(combined.direction, SignalDirection::Buy);
    assert_relative_eq!(combined.confidence, 1.0, epsilon = 1e-9);
    assert_eq!(combined.strategy, "combined");
}

#[test]
fn majority_weight_wins_against_a_dissenter() {
    // Trending regime: trend 0.55 + momentum 0.25 vs mean reversion 0.20.
    let signals = vec![
        signal(TREND_FOLLOWING, SignalDirection::Buy),
        signal(MEAN_REVERSION, SignalDirection::Sell),
        signal(MOMENTUM, SignalDirection::Buy),
    ];
    let params = RegimeParameters::for_regime(MarketRegime::TrendingUp);
    let combined = SignalCombiner::default()
        .combine(&signals, &params)
        .unwrap()
        .unwrap();
    assert_eq!(combined.direction, SignalDirection::Buy);
    assert_relative_eq!(combined.confidence, 0.80, epsilon = 1e-9);
}

#[test]
fn a_lone_low_weight_vote_misses_consensus() {
    // Choppy regime weights trend following at only 0.20; the two silent
    // strategies dilute its share below the 0.40 threshold.
    let signals = vec![signal(TREND_FOLLOWING, SignalDirection::Buy)];
    let params = RegimeParameters::for_regime(MarketRegime::Choppy);
    let result = SignalCombiner::default().combine(&signals, &params).unwrap();
    assert!(result.is_none());
}

#[test]
fn disagreement_below_threshold_produces_nothing() {
    let params = RegimeParameters {
        trend_weight: 0.38,
        mean_reversion_weight: 0.35,
        momentum_weight: 0.27,
        ..RegimeParameters::for_regime(MarketRegime::Choppy)
    };
    // Buy 0.38, sell 0.35, abstain 0.27: neither share reaches 0.40.
    let signals = vec![
        signal(TREND_FOLLOWING, SignalDirection::Buy),
        signal(MEAN_REVERSION, SignalDirection::Sell),
    ];
    let result = SignalCombiner::default().combine(&signals, &params).unwrap();
    assert!(result.is_none());
}

#[test]
fn an_exact_tie_produces_nothing() {
    let params = RegimeParameters {
        trend_weight: 0.5,
        mean_reversion_weight: 0.5,
        momentum_weight: 0.0,
        ..RegimeParameters::for_regime(MarketRegime::Choppy)
    };
    let signals = vec![
        signal(TREND_FOLLOWING, SignalDirection::Buy),
        signal(MEAN_REVERSION, SignalDirection::Sell),
    ];
    let result = SignalCombiner::default().combine(&signals, &params).unwrap();
    assert!(result.is_none());
}

#[test]
fn empty_input_produces_nothing() {
    let params = RegimeParameters::for_regime(MarketRegime::Choppy);
    assert!(SignalCombiner::default().combine(&[], &params).unwrap().is_none());
}

#[test]
fn combined_metadata_names_the_origin_strategy() {
    let signals = vec![
        signal(TREND_FOLLOWING, SignalDirection::Buy),
        signal(MOMENTUM, SignalDirection::Buy),
    ];
    let params = RegimeParameters::for_regime(MarketRegime::TrendingUp);
    let combined = SignalCombiner::default()
        .combine(&signals, &params)
        .unwrap()
        .unwrap();
    assert_eq!(
        combined.metadata["origin_strategy"],
        serde_json::json!(TREND_FOLLOWING)
    );
    assert!(combined.metadata.contains_key("contributors"));
}

#[test]
fn combined_metadata_carries_protective_exits_and_a_reason() {
    let signals = vec![
        signal(TREND_FOLLOWING, SignalDirection::Buy),
        signal(MOMENTUM, SignalDirection::Buy),
    ];
    let params = RegimeParameters::for_regime(MarketRegime::TrendingUp);
    let combined = SignalCombiner::default()
        .combine(&signals, &params)
        .unwrap()
        .unwrap();

    assert_eq!(
        combined.metadata["stop_loss_pct"],
        serde_json::json!(params.stop_loss_pct)
    );
    assert_eq!(
        combined.metadata["take_profit_pct"],
        serde_json::json!(params.take_profit_pct)
    );
    // Trend 0.55 + momentum 0.25 of a 1.0 weight table.
    let reason = combined.metadata["reason"].as_str().unwrap();
    assert_eq!(
        reason,
        "BUY consensus at 80% of strategy weight, anchored by trend_following"
    );
}

#[test]
fn custom_threshold_is_honored() {
    let signals = vec![signal(TREND_FOLLOWING, SignalDirection::Buy)];
    let params = RegimeParameters::for_regime(MarketRegime::TrendingUp);
    // Share is 0.55: passes the default threshold, fails a stricter one.
    assert!(SignalCombiner::new(0.6).combine(&signals, &params).unwrap().is_none());
    assert!(SignalCombiner::new(0.5).combine(&signals, &params).unwrap().is_some());
}
