//! Strategy generators proposing directional signals.
//!
//! Implementations are injected into the engine at construction; each must
//! tolerate short or malformed series by returning `Ok(None)` rather than
//! failing, reserving `Err` for contract violations.

pub mod mean_reversion;
pub mod momentum;
pub mod trend_following;

use crate::error::EngineError;
use crate::models::{Candle, Symbol, TradingSignal};
use crate::regime::RegimeParameters;

pub use mean_reversion::MeanReversionStrategy;
pub use momentum::MomentumStrategy;
pub use trend_following::TrendFollowingStrategy;

pub const TREND_FOLLOWING: &str = "trend_following";
pub const MEAN_REVERSION: &str = "mean_reversion";
pub const MOMENTUM: &str = "momentum";

/// Minimum bars a generator needs before it will propose anything.
pub const MIN_CANDLES: usize = 50;

pub trait SignalStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Propose a directional signal, or `Ok(None)` when conditions are not
    /// met or the series is too short for the underlying indicators.
    fn generate(
        &self,
        symbol: &Symbol,
        candles: &[Candle],
        parameters: &RegimeParameters,
    ) -> Result<Option<TradingSignal>, EngineError>;
}

/// The default generator set, in combiner weight order.
pub fn default_strategies() -> Vec<Box<dyn SignalStrategy>> {
    vec![
        Box::new(TrendFollowingStrategy::default()),
        Box::new(MeanReversionStrategy::default()),
        Box::new(MomentumStrategy::default()),
    ]
}
