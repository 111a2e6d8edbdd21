//! Loader for the admissions pipeline.
//!
//! Writes the curated frame as a single snappy-compressed Parquet file and
//! reads it back for inspection and verification.

mod checksum;
mod error;
mod parquet;

pub use checksum::file_sha256;
pub use error::{OutputError, Result};
pub use parquet::{LoadOptions, LoadSummary, load, read_parquet};
