//! Series normalization layer.

pub mod error;
pub mod normalizer;

pub use error::SeriesError;
pub use normalizer::{normalize, parse_timestamp};
