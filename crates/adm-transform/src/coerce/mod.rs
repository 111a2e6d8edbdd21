//! Best-effort conversion of untyped cells to their declared type.
//!
//! Every function here is total: input that cannot be converted yields
//! `None` instead of an error.

mod datetime;
mod numeric;
mod text;

use chrono::NaiveDateTime;

use adm_model::SemanticType;

pub use datetime::coerce_timestamp;
pub use numeric::coerce_int64;
pub use text::coerce_text;

/// A typed, non-null cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int64(i64),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl CellValue {
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            CellValue::Int64(_) => SemanticType::Int64,
            CellValue::Timestamp(_) => SemanticType::Timestamp,
            CellValue::Text(_) => SemanticType::Text,
        }
    }
}

/// Coerce a raw cell to `target`, returning `None` for absent or unparseable input.
pub fn coerce(raw: Option<&str>, target: SemanticType) -> Option<CellValue> {
    match target {
        SemanticType::Int64 => raw.and_then(coerce_int64).map(CellValue::Int64),
        SemanticType::Timestamp => raw.and_then(coerce_timestamp).map(CellValue::Timestamp),
        SemanticType::Text => coerce_text(raw).map(CellValue::Text),
    }
}

/// True when a raw cell carries no value at all.
///
/// Blank cells become null without counting as coercion failures.
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}
