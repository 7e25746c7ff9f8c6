//! Signal combination and confidence scoring.

pub mod combiner;
pub mod confidence;

pub use combiner::{SignalCombiner, COMBINED, DEFAULT_CONSENSUS_THRESHOLD};
pub use confidence::{ConfidenceAnalyzer, FactorWeights, TimeframeBars, FALLBACK_CONFIDENCE};
