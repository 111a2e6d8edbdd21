//! Data model for the admissions ETL pipeline.
//!
//! - **schema**: the ordered column contract and the canonical admissions schema
//! - **diagnostics**: per-column coercion failure counts returned by the transformer
//! - **warning**: non-fatal data-quality findings emitted by the validator

pub mod diagnostics;
pub mod error;
pub mod schema;
pub mod warning;

pub use diagnostics::{CoercionIssue, CoercionReport, MAX_SAMPLE_VALUES};
pub use error::{ModelError, Result};
pub use schema::{
    ADMITTIME, ColumnSpec, DERIVED_COLUMNS, DISCHTIME, ED_LENGTH_OF_STAY_MINUTES, EDOUTTIME,
    EDREGTIME, HADM_ID, LENGTH_OF_STAY_DAYS, SUBJECT_ID, Schema, SemanticType,
};
pub use warning::ValidationWarning;
