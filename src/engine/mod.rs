//! The per-symbol decision pipeline and the cycle fan-out.
//!
//! Pipeline order per symbol is fixed: regime detection, strategy
//! generation, combination, confidence scoring, sizing. Symbols are
//! independent; one symbol's failure is logged and excluded without
//! aborting the cycle.

use crate::common::math;
use crate::config::EngineConfig;
use crate::error::{EngineError, Stage};
use crate::models::{Decision, PortfolioSnapshot, Symbol, Timeframe};
use crate::regime::RegimeDetector;
use crate::services::{MarketDataProvider, VolatilityIndexProvider};
use crate::signals::{ConfidenceAnalyzer, SignalCombiner, TimeframeBars};
use crate::sizing::{PerformanceBook, PositionSizer, SizingContext};
use crate::strategies::{default_strategies, SignalStrategy};
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DAILY_BARS: usize = 320;
const INTRADAY_BARS: usize = 200;
const HELD_SYMBOL_BARS: usize = 80;

pub struct DecisionEngine {
    data: Arc<dyn MarketDataProvider>,
    stress_index: Option<Arc<dyn VolatilityIndexProvider>>,
    detector: RegimeDetector,
    strategies: Vec<Box<dyn SignalStrategy>>,
    combiner: SignalCombiner,
    analyzer: ConfidenceAnalyzer,
    sizer: PositionSizer,
    performance: Arc<PerformanceBook>,
    config: EngineConfig,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig, data: Arc<dyn MarketDataProvider>) -> Self {
        let detector =
            RegimeDetector::new(config.regime_cache_ttl).with_lookback(config.regime_lookback);
        Self {
            data,
            stress_index: None,
            detector,
            strategies: default_strategies(),
            combiner: SignalCombiner::new(config.consensus_threshold),
            analyzer: ConfidenceAnalyzer::default(),
            sizer: PositionSizer::new(config.sizer.clone()),
            performance: Arc::new(PerformanceBook::new()),
            config,
        }
    }

    pub fn with_volatility_index(mut self, provider: Arc<dyn VolatilityIndexProvider>) -> Self {
        self.stress_index = Some(provider);
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<Box<dyn SignalStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn with_performance_book(mut self, book: Arc<PerformanceBook>) -> Self {
        self.performance = book;
        self
    }

    pub fn performance_book(&self) -> &Arc<PerformanceBook> {
        &self.performance
    }

    pub fn regime_detector(&self) -> &RegimeDetector {
        &self.detector
    }

    /// Run one evaluation cycle over the candidate symbols.
    ///
    /// Symbols fan out as independent tasks; cancellation is checked
    /// cooperatively between symbols, and a symbol already mid-pipeline
    /// finishes rather than being torn down. The result is ranked by
    /// confidence, highest first.
    pub async fn run_cycle(
        self: Arc<Self>,
        symbols: &[Symbol],
        portfolio: &PortfolioSnapshot,
        cancel: &CancellationToken,
    ) -> Vec<Decision> {
        let mut handles = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if cancel.is_cancelled() {
                info!(remaining = symbols.len() - handles.len(), "cycle cancelled");
                break;
            }
            let engine = Arc::clone(&self);
            let symbol = symbol.clone();
            let portfolio = portfolio.clone();
            handles.push(tokio::spawn(async move {
                let result = engine.evaluate_symbol(&symbol, &portfolio).await;
                (symbol, result)
            }));
        }

        let mut decisions = Vec::new();
        for joined in join_all(handles).await {
            match joined {
                Ok((_, Ok(Some(decision)))) => decisions.push(decision),
                Ok((symbol, Ok(None))) => {
                    debug!(symbol = %symbol, "no actionable decision");
                }
                Ok((symbol, Err(error))) => {
                    warn!(symbol = %symbol, %error, "symbol excluded from cycle");
                }
                Err(join_error) => {
                    warn!(%join_error, "symbol task panicked, excluded from cycle");
                }
            }
        }

        decisions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        decisions
    }

    /// Evaluate one symbol through the full pipeline.
    ///
    /// `Ok(None)` means no trade this cycle: insufficient data, no consensus,
    /// sub-threshold confidence, or a zero size. `Err` is reserved for
    /// provider failures and contract violations.
    pub async fn evaluate_symbol(
        &self,
        symbol: &Symbol,
        portfolio: &PortfolioSnapshot,
    ) -> Result<Option<Decision>, EngineError> {
        let daily = self.data.get_candles(symbol, Timeframe::D1, DAILY_BARS).await?;
        // Intraday series only feed the confidence analyzer; a provider
        // without them degrades that factor, not the pipeline.
        let hourly = self
            .data
            .get_candles(symbol, Timeframe::H1, INTRADAY_BARS)
            .await
            .unwrap_or_default();
        let four_hour = self
            .data
            .get_candles(symbol, Timeframe::H4, INTRADAY_BARS)
            .await
            .unwrap_or_default();

        let stress_level = match &self.stress_index {
            Some(provider) => provider.current_level().await,
            None => None,
        };

        let regime = self.detector.detect(symbol, &daily, stress_level);
        let parameters = self.detector.parameters(regime);

        let mut candidates = Vec::new();
        for strategy in &self.strategies {
            match strategy.generate(symbol, &daily, &parameters) {
                Ok(Some(signal)) => candidates.push(signal),
                Ok(None) => {}
                // Contract violation in a generator; propagate.
                Err(error @ EngineError::InvalidSignal(_)) => return Err(error),
                Err(error) => {
                    warn!(
                        symbol = %symbol,
                        strategy = strategy.name(),
                        stage = %Stage::SignalGeneration,
                        %error,
                        "generator failed, treated as abstention"
                    );
                }
            }
        }

        let Some(combined) = self.combiner.combine(&candidates, &parameters)? else {
            return Ok(None);
        };

        let bars = TimeframeBars {
            hourly: &hourly,
            four_hour: &four_hour,
            daily: &daily,
        };
        let confidence = self.analyzer.score(&combined, &bars, regime);
        let minimum = self.config.min_confidence.max(parameters.min_confidence);
        if confidence < minimum {
            debug!(
                symbol = %symbol,
                confidence,
                minimum,
                "signal filtered below minimum confidence"
            );
            return Ok(None);
        }
        let scored = combined.rescored(confidence)?;

        let closes: Vec<f64> = daily.iter().map(|c| c.close).collect();
        let symbol_returns = math::simple_returns(&closes);
        let held_returns = self.held_symbol_returns(symbol, portfolio).await;

        // Kelly statistics track the strategy that anchored the combined
        // vote, not the synthetic "combined" name.
        let origin = scored
            .metadata
            .get("origin_strategy")
            .and_then(|v| v.as_str())
            .unwrap_or(&scored.strategy)
            .to_string();

        let quantity = self.sizer.size(&SizingContext {
            signal: &scored,
            confidence,
            parameters: &parameters,
            portfolio,
            kelly: self.performance.kelly_inputs(&origin),
            symbol_returns: &symbol_returns,
            held_returns: &held_returns,
        });

        if quantity == 0 {
            debug!(symbol = %symbol, "sized to zero, no decision");
            return Ok(None);
        }

        Ok(Some(Decision {
            symbol: symbol.clone(),
            direction: scored.direction,
            quantity,
            confidence,
            regime,
            price: scored.price,
        }))
    }

    /// Daily returns of currently held symbols for the correlation stage.
    /// A failing fetch skips that holding rather than failing the candidate.
    async fn held_symbol_returns(
        &self,
        candidate: &Symbol,
        portfolio: &PortfolioSnapshot,
    ) -> HashMap<String, Vec<f64>> {
        let mut held = HashMap::new();
        for (ticker, position) in &portfolio.positions {
            if *ticker == candidate.ticker {
                continue;
            }
            let symbol = Symbol::new(position.symbol.clone(), candidate.exchange.clone())
                .with_currency(candidate.currency.clone());
            match self
                .data
                .get_candles(&symbol, Timeframe::D1, HELD_SYMBOL_BARS)
                .await
            {
                Ok(candles) if !candles.is_empty() => {
                    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
                    held.insert(ticker.clone(), math::simple_returns(&closes));
                }
                Ok(_) => {}
                Err(error) => {
                    debug!(
                        held = %ticker,
                        stage = %Stage::Sizing,
                        %error,
                        "held symbol history unavailable, skipping correlation input"
                    );
                }
            }
        }
        held
    }
}
