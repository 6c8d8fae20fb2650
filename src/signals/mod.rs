//! Signal evaluation interfaces.

pub mod classifier;
pub mod confidence;
pub mod engine;

pub use classifier::{CrossState, CrossoverClassifier};
pub use confidence::{divergence_confidence, CONFIDENCE_CAP};
pub use engine::{recent_alerts, SignalEngine};
