//! Schema transformer for the admissions pipeline.
//!
//! - **coerce**: pure per-type cell conversion (integer, timestamp, text)
//! - **derive**: length-of-stay calculations
//! - **projection**: schema column selection with the missing-column check
//! - **pipeline**: the full raw-to-curated transformation

pub mod coerce;
pub mod derive;
mod error;
pub mod pipeline;
pub mod projection;

pub use coerce::{CellValue, coerce, coerce_int64, coerce_text, coerce_timestamp};
pub use derive::{ed_length_of_stay_minutes, length_of_stay_days};
pub use error::{Result, TransformError};
pub use pipeline::{TIMESTAMP_UNIT, TransformOutput, dtype_for, transform};
pub use projection::project;
