//! Price bar data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw observation as delivered by an ingestion source (CSV upload,
/// external feed). Every field is still a string; the series normalizer
/// owns numeric coercion and ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub symbol: String,
    pub timestamp: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

/// One normalized OHLCV observation. `close` is the only field the signal
/// engine reads; the rest is carried for charting and storage consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(
        symbol: impl Into<String>,
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
