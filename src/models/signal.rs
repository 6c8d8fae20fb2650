//! Signal output data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of an emitted crossover signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => write!(f, "Buy"),
            Direction::Sell => write!(f, "Sell"),
        }
    }
}

/// One emitted trading signal. Immutable once produced; `id` is 1-based and
/// local to the engine run that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: u32,
    pub symbol: String,
    pub direction: Direction,
    /// Bounded percentage in `[0.0, 99.0]`, one decimal place.
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    /// Human-readable one-liner, the shape the alerts feed expects.
    pub fn alert_line(&self) -> String {
        format!(
            "{} signal: {} at {}",
            self.symbol, self.direction, self.timestamp
        )
    }
}

/// The short/long rolling average pair at one series index. Only produced
/// for indices where both trailing windows are fully populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalWindow {
    pub index: usize,
    pub short_avg: f64,
    pub long_avg: f64,
}
