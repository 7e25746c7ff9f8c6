//! Demo driver: one evaluation cycle against canned synthetic data.

use chrono::{Duration as ChronoDuration, Utc};
use quantrix::config::EngineConfig;
use quantrix::engine::DecisionEngine;
use quantrix::logging::init_logging;
use quantrix::models::{Candle, PortfolioSnapshot, Symbol, Timeframe};
use quantrix::services::CannedDataProvider;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

fn synthetic_uptrend(count: usize, start_price: f64) -> Vec<Candle> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let base = start_price + i as f64 * 0.5;
            let wiggle = ((i % 7) as f64 - 3.0) * 0.15;
            Candle::new(
                base + wiggle,
                base + wiggle + 0.6,
                base + wiggle - 0.4,
                base + wiggle + 0.3,
                1_000_000.0 + (i % 11) as f64 * 120_000.0,
                now - ChronoDuration::days((count - i) as i64),
            )
        })
        .collect()
}

#[tokio::main]
async fn main() {
    init_logging();

    let config = EngineConfig::from_env();
    let symbols: Vec<Symbol> = config
        .symbols
        .iter()
        .map(|t| Symbol::new(t.clone(), "DEMO"))
        .collect();

    let mut provider = CannedDataProvider::new();
    for symbol in &symbols {
        provider = provider
            .with_series(symbol.ticker.clone(), Timeframe::D1, synthetic_uptrend(320, 100.0))
            .with_series(symbol.ticker.clone(), Timeframe::H4, synthetic_uptrend(200, 150.0))
            .with_series(symbol.ticker.clone(), Timeframe::H1, synthetic_uptrend(200, 155.0));
    }

    let engine = Arc::new(DecisionEngine::new(config, Arc::new(provider)));
    let portfolio = PortfolioSnapshot::new(100_000.0, 100_000.0);
    let cancel = CancellationToken::new();

    let decisions = engine.run_cycle(&symbols, &portfolio, &cancel).await;

    info!(count = decisions.len(), "cycle complete");
    for decision in &decisions {
        info!(
            symbol = %decision.symbol,
            direction = %decision.direction,
            quantity = decision.quantity,
            confidence = format!("{:.2}", decision.confidence),
            regime = %decision.regime,
            price = decision.price,
            "decision"
        );
    }
}
