//! Unit tests for the market value types.

use chrono::Utc;
use quantrix::models::{Candle, Symbol};
use std::collections::HashMap;

#[test]
fn symbol_defaults_to_usd() {
    let symbol = Symbol::new("AAPL", "NASDAQ");
    assert_eq!(symbol.ticker, "AAPL");
    assert_eq!(symbol.exchange, "NASDAQ");
    assert_eq!(symbol.currency, "USD");
    assert_eq!(symbol.to_string(), "AAPL");
}

#[test]
fn currency_distinguishes_otherwise_equal_symbols() {
    let usd = Symbol::new("SHEL", "LSE");
    let gbp = Symbol::new("SHEL", "LSE").with_currency("GBP");
    assert_ne!(usd, gbp);

    let mut keyed: HashMap<Symbol, u32> = HashMap::new();
    keyed.insert(usd.clone(), 1);
    keyed.insert(gbp.clone(), 2);
    assert_eq!(keyed.len(), 2);
    assert_eq!(keyed[&usd], 1);
    assert_eq!(keyed[&gbp], 2);
}

#[test]
fn return_from_handles_a_zero_reference() {
    let candle = Candle::new(100.0, 101.0, 99.0, 102.0, 1000.0, Utc::now());
    assert_eq!(candle.return_from(100.0), 0.02);
    assert_eq!(candle.return_from(0.0), 0.0);
}
