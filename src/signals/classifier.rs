//! Crossover classification
//!
//! Walks the defined `SignalWindow`s in index order and emits a `Signal`
//! wherever the configured policy detects a crossover.

use crate::config::{ConfidenceMode, CrossoverPolicy, EngineConfig};
use crate::models::{Direction, PriceBar, Signal, SignalWindow};
use crate::signals::confidence::{divergence_confidence, round_percent};

/// Relation of the short average to the long average at one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossState {
    /// No defined window observed yet.
    #[default]
    Unknown,
    ShortAbove,
    ShortBelow,
    /// Exact equality. Neutral: emits nothing and does not count as leaving
    /// `ShortAbove`/`ShortBelow`, so a flat crossover never re-triggers.
    ShortEqual,
}

impl CrossState {
    pub fn from_window(window: &SignalWindow) -> Self {
        if window.short_avg > window.long_avg {
            CrossState::ShortAbove
        } else if window.short_avg < window.long_avg {
            CrossState::ShortBelow
        } else {
            CrossState::ShortEqual
        }
    }
}

/// Stateful classifier for one engine run. Signal ids are 1-based and local
/// to the run.
#[derive(Debug)]
pub struct CrossoverClassifier {
    policy: CrossoverPolicy,
    confidence: ConfidenceMode,
    /// Last non-equal relation seen (crossing-edge policy only).
    state: CrossState,
    next_id: u32,
}

impl CrossoverClassifier {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            policy: config.policy,
            confidence: config.confidence,
            state: CrossState::Unknown,
            next_id: 1,
        }
    }

    /// Feed the next defined window together with its source bar. Windows
    /// must arrive in ascending index order.
    pub fn observe(&mut self, bar: &PriceBar, window: &SignalWindow) -> Option<Signal> {
        let relation = CrossState::from_window(window);

        let direction = match self.policy {
            CrossoverPolicy::CrossingEdge => {
                if relation == CrossState::ShortEqual {
                    // Neutral: hold the previous side so it cannot re-trigger.
                    return None;
                }
                let crossed = relation != self.state;
                self.state = relation;
                if !crossed {
                    return None;
                }
                match relation {
                    CrossState::ShortAbove => Direction::Buy,
                    CrossState::ShortBelow => Direction::Sell,
                    CrossState::Unknown | CrossState::ShortEqual => unreachable!(),
                }
            }
            CrossoverPolicy::Snapshot => match relation {
                CrossState::ShortAbove => Direction::Buy,
                CrossState::ShortBelow => Direction::Sell,
                CrossState::Unknown | CrossState::ShortEqual => return None,
            },
        };

        let confidence = match self.confidence {
            ConfidenceMode::Divergence => {
                // Undefined ratio on a zero baseline: the index is skipped.
                divergence_confidence(window.short_avg, window.long_avg)?
            }
            ConfidenceMode::Fixed { value } => round_percent(value),
        };

        let signal = Signal {
            id: self.next_id,
            symbol: bar.symbol.clone(),
            direction,
            confidence,
            timestamp: bar.timestamp,
        };
        self.next_id += 1;
        Some(signal)
    }
}
