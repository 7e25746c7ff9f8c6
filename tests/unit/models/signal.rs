//! Unit tests for signal construction contracts.

use crate::test_helpers::symbol;
use quantrix::error::EngineError;
use quantrix::models::{SignalDirection, TradingSignal};

#[test]
fn valid_confidence_constructs() {
    let signal =
        TradingSignal::new(symbol("AAPL"), SignalDirection::Buy, 180.0, "test", 0.75).unwrap();
    assert_eq!(signal.direction, SignalDirection::Buy);
    assert_eq!(signal.confidence, 0.75);
}

#[test]
fn confidence_bounds_are_inclusive() {
    assert!(TradingSignal::new(symbol("A"), SignalDirection::Buy, 1.0, "test", 0.0).is_ok());
    assert!(TradingSignal::new(symbol("A"), SignalDirection::Buy, 1.0, "test", 1.0).is_ok());
}

#[test]
fn out_of_range_confidence_is_an_invalid_signal_error() {
    for bad in [-0.01, 1.01, f64::NAN] {
        let result = TradingSignal::new(symbol("A"), SignalDirection::Sell, 1.0, "test", bad);
        assert!(matches!(result, Err(EngineError::InvalidSignal(_))), "confidence {bad} accepted");
    }
}

#[test]
fn rescoring_revalidates() {
    let signal =
        TradingSignal::new(symbol("A"), SignalDirection::Buy, 1.0, "test", 0.5).unwrap();
    assert!(signal.clone().rescored(0.9).is_ok());
    assert!(matches!(
        signal.rescored(1.5),
        Err(EngineError::InvalidSignal(_))
    ));
}

#[test]
fn metadata_round_trips_through_serde() {
    let signal = TradingSignal::new(symbol("MSFT"), SignalDirection::Buy, 400.0, "test", 0.6)
        .unwrap()
        .with_metadata("rsi", serde_json::json!(27.5));
    let raw = serde_json::to_string(&signal).unwrap();
    let parsed: TradingSignal = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.metadata["rsi"], serde_json::json!(27.5));
    assert_eq!(parsed.symbol.ticker, "MSFT");
}
