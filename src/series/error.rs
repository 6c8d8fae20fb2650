use thiserror::Error;

/// Errors surfaced by series normalization. Everything data-quality related
/// is resolved at this boundary; the tracker and classifier never fail on a
/// normalized series.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("malformed record: field '{field}' has non-numeric value '{value}'")]
    MalformedRecord { field: String, value: String },

    #[error("unparseable timestamp '{0}'")]
    BadTimestamp(String),

    /// Zero records supplied. Callers must treat this as "no signals", not
    /// as a failure that aborts a larger batch.
    #[error("empty price series")]
    Empty,
}
