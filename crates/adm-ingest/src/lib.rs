//! Admissions source extraction.
//!
//! Reads a comma-separated, UTF-8 source file with a header row into a
//! Polars [`DataFrame`](polars::prelude::DataFrame). Every column is read as
//! text; type coercion belongs to the transformer.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use adm_ingest::extract;
//!
//! let raw = extract(Path::new("admissions.csv"))?;
//! println!("{} rows", raw.height());
//! ```

mod csv;
mod error;

pub use crate::csv::{CsvHeaders, extract, read_csv_headers, validate_encoding};
pub use error::{IngestError, Result};
