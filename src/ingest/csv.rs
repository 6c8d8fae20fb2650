//! CSV ingestion for uploaded bar files.
//!
//! Expected header: `symbol,timestamp,open,high,low,close,volume`. Fields
//! stay strings here; coercion and ordering belong to the series normalizer.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::ingest::IngestError;
use crate::models::RawRecord;

/// Read raw records from any CSV reader.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Read raw records from a CSV file on disk.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, IngestError> {
    let file = File::open(path.as_ref())?;
    read_records(file)
}
