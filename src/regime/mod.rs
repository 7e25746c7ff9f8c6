//! Market regime classification and regime-conditioned parameters.

pub mod cache;
pub mod detector;
pub mod parameters;

use serde::{Deserialize, Serialize};

pub use cache::RegimeCache;
pub use detector::RegimeDetector;
pub use parameters::RegimeParameters;

/// Discrete classification of current market behavior. Exactly one variant
/// holds per (symbol, evaluation time) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MarketRegime {
    TrendingUp,
    TrendingDown,
    Choppy,
    HighVolatility,
    LowVolatility,
    Crisis,
}

impl MarketRegime {
    pub fn is_trending(&self) -> bool {
        matches!(self, MarketRegime::TrendingUp | MarketRegime::TrendingDown)
    }
}

impl std::fmt::Display for MarketRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarketRegime::TrendingUp => "trending_up",
            MarketRegime::TrendingDown => "trending_down",
            MarketRegime::Choppy => "choppy",
            MarketRegime::HighVolatility => "high_volatility",
            MarketRegime::LowVolatility => "low_volatility",
            MarketRegime::Crisis => "crisis",
        };
        write!(f, "{}", name)
    }
}
