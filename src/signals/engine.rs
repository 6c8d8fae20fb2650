//! Signal engine: normalize → track → classify.

use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::sma::rolling_windows;
use crate::models::{PriceBar, RawRecord, Signal};
use crate::series::{self, SeriesError};
use crate::signals::classifier::CrossoverClassifier;

pub struct SignalEngine;

impl SignalEngine {
    /// Run the engine over an already-normalized series.
    ///
    /// Pure: no I/O, no shared state, linear in the series length. The same
    /// series and config always produce byte-identical output. A series
    /// shorter than the long window yields no signals, never an error.
    pub fn run(bars: &[PriceBar], config: &EngineConfig) -> Vec<Signal> {
        let windows = rolling_windows(bars, config.short_window, config.long_window);
        let mut classifier = CrossoverClassifier::new(config);

        let signals: Vec<Signal> = windows
            .iter()
            .filter_map(|window| classifier.observe(&bars[window.index], window))
            .collect();

        debug!(
            bars = bars.len(),
            windows = windows.len(),
            signals = signals.len(),
            "engine run complete"
        );
        signals
    }

    /// Normalize raw records and run the engine in one step.
    ///
    /// An empty batch is an expected operating condition and maps to zero
    /// signals; a malformed record fails the whole batch with no partial
    /// signal list.
    pub fn evaluate(records: &[RawRecord], config: &EngineConfig) -> Result<Vec<Signal>, SeriesError> {
        let bars = match series::normalize(records) {
            Ok(bars) => bars,
            Err(SeriesError::Empty) => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        Ok(Self::run(&bars, config))
    }
}

/// Format the most recent `limit` signals as alert lines, oldest first,
/// in the shape the alerts feed renders directly.
pub fn recent_alerts(signals: &[Signal], limit: usize) -> Vec<String> {
    let start = signals.len().saturating_sub(limit);
    signals[start..].iter().map(Signal::alert_line).collect()
}
