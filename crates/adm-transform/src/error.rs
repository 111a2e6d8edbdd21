use polars::prelude::PolarsError;
use thiserror::Error;

use adm_model::SemanticType;

/// Structural failures of the transformer.
///
/// Bad cell values are never errors; they become null and are reported in
/// the [`CoercionReport`](adm_model::CoercionReport).
#[derive(Debug, Error)]
pub enum TransformError {
    /// A schema column is absent from the source.
    #[error("missing required column '{column}' in source")]
    MissingColumn { column: String },

    /// A column needed for a derived field is absent or wrongly typed in the schema.
    #[error("column '{column}' must be declared as {expected} to derive {derived}")]
    DerivationInput {
        column: String,
        expected: SemanticType,
        derived: &'static str,
    },

    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
