//! Environment-driven engine configuration.
//!
//! Every knob has a typed default; `.env` files are honored in development.

use crate::sizing::SizerConfig;
use std::time::Duration;

/// Runtime environment name, defaulting to sandbox.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub symbols: Vec<String>,
    /// Global confidence floor; the regime bundle can only raise it.
    pub min_confidence: f64,
    pub consensus_threshold: f64,
    pub regime_cache_ttl: Duration,
    pub regime_lookback: usize,
    pub sizer: SizerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            symbols: vec!["SPY".to_string()],
            min_confidence: 0.55,
            consensus_threshold: 0.40,
            regime_cache_ttl: Duration::from_secs(900),
            regime_lookback: 100,
            sizer: SizerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let symbols = std::env::var("SYMBOLS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.symbols);

        Self {
            symbols,
            min_confidence: env_f64("MIN_CONFIDENCE", defaults.min_confidence),
            consensus_threshold: env_f64("CONSENSUS_THRESHOLD", defaults.consensus_threshold),
            regime_cache_ttl: Duration::from_secs(env_u64(
                "REGIME_CACHE_TTL_SECONDS",
                defaults.regime_cache_ttl.as_secs(),
            )),
            regime_lookback: env_u64("REGIME_LOOKBACK", defaults.regime_lookback as u64) as usize,
            sizer: SizerConfig {
                kelly_floor: env_f64("KELLY_FLOOR", defaults.sizer.kelly_floor),
                kelly_cap: env_f64("KELLY_CAP", defaults.sizer.kelly_cap),
                target_volatility: env_f64("TARGET_VOLATILITY", defaults.sizer.target_volatility),
                correlation_ceiling: env_f64(
                    "CORRELATION_CEILING",
                    defaults.sizer.correlation_ceiling,
                ),
                max_position_fraction: env_f64(
                    "MAX_POSITION_FRACTION",
                    defaults.sizer.max_position_fraction,
                ),
                min_notional: env_f64("MIN_NOTIONAL", defaults.sizer.min_notional),
            },
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
