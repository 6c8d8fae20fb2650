//! Engine configuration and environment helpers.

use serde::{Deserialize, Serialize};
use std::env;

/// How crossings are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossoverPolicy {
    /// Stateful: emit only when the short/long relation flips between
    /// consecutive defined indices. The temporally correct definition of a
    /// crossover and the default.
    CrossingEdge,
    /// Stateless compat mode: classify every defined index independently,
    /// emitting on any inequality. Produces a signal at every qualifying
    /// index, not only at transitions.
    Snapshot,
}

/// How emitted signals are scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ConfidenceMode {
    /// Score from how far apart the two averages are:
    /// `min(|short - long| / long * 100, 99)`, one decimal place.
    Divergence,
    /// Constant score for every crossover; used when only the occurrence of
    /// the cross is trusted, not its magnitude.
    Fixed { value: f64 },
}

pub const DEFAULT_SHORT_WINDOW: usize = 5;
pub const DEFAULT_LONG_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub policy: CrossoverPolicy,
    pub confidence: ConfidenceMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
            policy: CrossoverPolicy::CrossingEdge,
            confidence: ConfidenceMode::Divergence,
        }
    }
}

impl EngineConfig {
    /// Default configuration with window sizes overridable through
    /// `SHORT_WINDOW` / `LONG_WINDOW` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(short) = read_env_usize("SHORT_WINDOW") {
            config.short_window = short;
        }
        if let Some(long) = read_env_usize("LONG_WINDOW") {
            config.long_window = long;
        }
        config
    }
}

fn read_env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Deployment environment name, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
