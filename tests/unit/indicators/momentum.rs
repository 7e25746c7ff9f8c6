//! Unit tests for the momentum indicators.

use crate::test_helpers::{downtrend_candles, flat_candles, uptrend_candles};
use approx::assert_relative_eq;
use quantrix::indicators::momentum::{macd, roc, rsi, stochastic};

#[test]
fn rsi_is_maximal_on_pure_gains() {
    let rsi = rsi::calculate_rsi_default(&uptrend_candles(60)).unwrap();
    assert_relative_eq!(rsi.value, 100.0);
}

#[test]
fn rsi_is_low_on_sustained_losses() {
    let rsi = rsi::calculate_rsi_default(&downtrend_candles(60)).unwrap();
    assert!(rsi.value < 10.0, "RSI {} should be deeply oversold", rsi.value);
}

#[test]
fn rsi_needs_period_plus_one_bars() {
    assert!(rsi::calculate_rsi(&uptrend_candles(14), 14).is_none());
    assert!(rsi::calculate_rsi(&uptrend_candles(15), 14).is_some());
}

#[test]
fn macd_is_positive_in_an_uptrend() {
    let macd = macd::calculate_macd_default(&uptrend_candles(120)).unwrap();
    assert!(macd.macd > 0.0, "MACD line {} should be positive", macd.macd);
}

#[test]
fn macd_is_negative_in_a_downtrend() {
    let macd = macd::calculate_macd_default(&downtrend_candles(120)).unwrap();
    assert!(macd.macd < 0.0);
}

#[test]
fn macd_returns_none_on_short_series() {
    assert!(macd::calculate_macd_default(&uptrend_candles(30)).is_none());
}

#[test]
fn stochastic_pins_high_in_an_uptrend() {
    let stoch = stochastic::calculate_stochastic_default(&uptrend_candles(60)).unwrap();
    assert!(stoch.k > 80.0, "%K {} should sit near the top of the range", stoch.k);
    assert!(stoch.d > 80.0);
}

#[test]
fn stochastic_is_neutral_on_a_flat_zero_range_series() {
    let candles = flat_candles(60, 100.0);
    let stoch = stochastic::calculate_stochastic_default(&candles).unwrap();
    // Closes sit mid-range between the fixed high and low wicks.
    assert_relative_eq!(stoch.k, 50.0);
}

#[test]
fn roc_measures_the_twenty_bar_change() {
    let candles = uptrend_candles(30);
    let roc = roc::calculate_roc_default(&candles).unwrap();
    // Close rises 0.5/bar from 100: bar 9 closes 104.5, bar 29 closes 114.5.
    assert_relative_eq!(roc.value, 100.0 * 10.0 / 104.5, epsilon = 1e-9);
}

#[test]
fn roc_returns_none_without_enough_history() {
    assert!(roc::calculate_roc_default(&uptrend_candles(20)).is_none());
}
