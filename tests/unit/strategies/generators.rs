//! Unit tests for the three strategy generators.

use crate::test_helpers::{
    accelerating_uptrend_candles, flat_candles, oversold_candles, symbol, uptrend_candles,
    with_final_volume,
};
use quantrix::models::SignalDirection;
use quantrix::regime::{MarketRegime, RegimeParameters};
use quantrix::strategies::{
    MeanReversionStrategy, MomentumStrategy, SignalStrategy, TrendFollowingStrategy,
};

fn choppy_params() -> RegimeParameters {
    RegimeParameters::for_regime(MarketRegime::Choppy)
}

#[test]
fn all_generators_abstain_below_fifty_bars() {
    let candles = uptrend_candles(49);
    let params = choppy_params();
    let sym = symbol("SHORT");
    let generators: Vec<Box<dyn SignalStrategy>> = vec![
        Box::new(TrendFollowingStrategy::default()),
        Box::new(MeanReversionStrategy),
        Box::new(MomentumStrategy),
    ];
    for generator in &generators {
        let result = generator.generate(&sym, &candles, &params).unwrap();
        assert!(result.is_none(), "{} proposed on a short series", generator.name());
    }
}

#[test]
fn trend_following_buys_a_volume_confirmed_uptrend() {
    let candles = with_final_volume(accelerating_uptrend_candles(120), 2500.0);
    let signal = TrendFollowingStrategy::default()
        .generate(&symbol("TRND"), &candles, &choppy_params())
        .unwrap()
        .expect("uptrend with volume should produce a signal");
    assert_eq!(signal.direction, SignalDirection::Buy);
    assert_eq!(signal.strategy, "trend_following");
    assert!(signal.metadata.contains_key("ema_fast"));
    assert!(signal.metadata.contains_key("volume_ratio"));
}

#[test]
fn trend_following_abstains_without_volume_confirmation() {
    // Constant volume: the last bar never clears 1.05x its own average.
    let candles = accelerating_uptrend_candles(120);
    let result = TrendFollowingStrategy::default()
        .generate(&symbol("TRND"), &candles, &choppy_params())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn mean_reversion_buys_an_oversold_breakdown() {
    let candles = oversold_candles(80);
    let signal = MeanReversionStrategy
        .generate(&symbol("DIP"), &candles, &choppy_params())
        .unwrap()
        .expect("oversold series should produce a signal");
    assert_eq!(signal.direction, SignalDirection::Buy);
    assert_eq!(signal.strategy, "mean_reversion");
    let rsi = signal.metadata["rsi"].as_f64().unwrap();
    assert!(rsi < choppy_params().rsi_oversold);
}

#[test]
fn mean_reversion_abstains_on_a_flat_market() {
    let result = MeanReversionStrategy
        .generate(&symbol("FLAT"), &flat_candles(80, 100.0), &choppy_params())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn momentum_buys_when_all_three_checks_agree() {
    let candles = accelerating_uptrend_candles(120);
    let signal = MomentumStrategy
        .generate(&symbol("MOMO"), &candles, &choppy_params())
        .unwrap()
        .expect("accelerating uptrend should produce a signal");
    assert_eq!(signal.direction, SignalDirection::Buy);
    assert!(signal.metadata["roc"].as_f64().unwrap() > 0.0);
}

#[test]
fn momentum_abstains_when_checks_disagree() {
    let result = MomentumStrategy
        .generate(&symbol("FLAT"), &flat_candles(120, 100.0), &choppy_params())
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn generator_confidences_stay_in_bounds() {
    let candles = with_final_volume(accelerating_uptrend_candles(120), 5000.0);
    let params = choppy_params();
    let sym = symbol("BND");
    for generator in [
        Box::new(TrendFollowingStrategy::default()) as Box<dyn SignalStrategy>,
        Box::new(MomentumStrategy),
    ] {
        if let Some(signal) = generator.generate(&sym, &candles, &params).unwrap() {
            assert!((0.0..=1.0).contains(&signal.confidence));
        }
    }
}
