//! Series normalization: raw string-field records in, chronologically
//! ordered `PriceBar`s out.
//!
//! This is the only place numeric coercion happens. A single bad record
//! fails the whole batch; no partial series ever reaches the tracker.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::{PriceBar, RawRecord};
use crate::series::error::SeriesError;

/// Coerce a numeric field, requiring a finite non-negative value.
pub fn parse_price(field: &str, value: &str) -> Result<f64, SeriesError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SeriesError::MissingField(field.to_string()));
    }
    let parsed: f64 = trimmed.parse().map_err(|_| SeriesError::MalformedRecord {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(SeriesError::MalformedRecord {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(parsed)
}

/// Parse a timestamp as RFC 3339, `YYYY-MM-DD HH:MM:SS`, or a bare date
/// (midnight UTC). Covers the formats seen in uploaded CSV files.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SeriesError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SeriesError::MissingField("timestamp".to_string()));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(SeriesError::BadTimestamp(value.to_string()))
}

fn normalize_record(record: &RawRecord) -> Result<PriceBar, SeriesError> {
    if record.symbol.trim().is_empty() {
        return Err(SeriesError::MissingField("symbol".to_string()));
    }

    Ok(PriceBar {
        symbol: record.symbol.trim().to_string(),
        timestamp: parse_timestamp(&record.timestamp)?,
        open: parse_price("open", &record.open)?,
        high: parse_price("high", &record.high)?,
        low: parse_price("low", &record.low)?,
        close: parse_price("close", &record.close)?,
        volume: parse_price("volume", &record.volume)?,
    })
}

/// Normalize a batch of raw records into a chronologically ascending series.
///
/// Pure and idempotent: normalizing an already-normalized series changes
/// nothing. Ties in timestamp keep their input order (stable sort).
pub fn normalize(records: &[RawRecord]) -> Result<Vec<PriceBar>, SeriesError> {
    if records.is_empty() {
        return Err(SeriesError::Empty);
    }

    let mut bars = records
        .iter()
        .map(normalize_record)
        .collect::<Result<Vec<_>, _>>()?;
    bars.sort_by_key(|bar| bar.timestamp);
    Ok(bars)
}
