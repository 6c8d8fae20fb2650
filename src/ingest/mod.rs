//! Data ingestion boundary. Sources hand over raw string-field records;
//! everything downstream works on normalized `PriceBar`s.

pub mod csv;

use thiserror::Error;

use crate::series::SeriesError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse CSV: {0}")]
    Csv(#[from] ::csv::Error),

    #[error(transparent)]
    Series(#[from] SeriesError),
}
