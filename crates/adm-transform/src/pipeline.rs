//! Raw-to-curated transformation.
//!
//! Projects the raw frame onto the schema, coerces each column to its
//! declared type, and appends the derived length-of-stay columns. The row
//! count is preserved exactly; values that fail coercion become null.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series, TimeUnit};
use tracing::{debug, info};

use adm_model::{
    ADMITTIME, CoercionIssue, CoercionReport, DISCHTIME, ED_LENGTH_OF_STAY_MINUTES, EDOUTTIME,
    EDREGTIME, LENGTH_OF_STAY_DAYS, Schema, SemanticType,
};

use crate::coerce::{coerce_int64, coerce_text, coerce_timestamp, is_blank};
use crate::derive::{ed_length_of_stay_minutes, length_of_stay_days};
use crate::error::{Result, TransformError};
use crate::projection::project;

/// Resolution of every timestamp column written by the transformer.
pub const TIMESTAMP_UNIT: TimeUnit = TimeUnit::Microseconds;

const DERIVATION_INPUTS: [(&str, &str); 4] = [
    (ADMITTIME, LENGTH_OF_STAY_DAYS),
    (DISCHTIME, LENGTH_OF_STAY_DAYS),
    (EDREGTIME, ED_LENGTH_OF_STAY_MINUTES),
    (EDOUTTIME, ED_LENGTH_OF_STAY_MINUTES),
];

/// Physical column type for a semantic type.
pub fn dtype_for(semantic_type: SemanticType) -> DataType {
    match semantic_type {
        SemanticType::Int64 => DataType::Int64,
        SemanticType::Timestamp => DataType::Datetime(TIMESTAMP_UNIT, None),
        SemanticType::Text => DataType::String,
    }
}

/// Curated frame plus per-column coercion diagnostics.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub frame: DataFrame,
    pub coercion: CoercionReport,
}

/// Transform a raw all-text frame into the curated admissions frame.
///
/// Output columns are the schema columns in schema order followed by
/// `length_of_stay_days` (Int64) and `ed_length_of_stay_minutes` (Float64).
///
/// # Errors
///
/// - [`TransformError::DerivationInput`] if the schema does not declare the
///   four derivation inputs as timestamps.
/// - [`TransformError::MissingColumn`] if a schema column is absent from `raw`.
pub fn transform(raw: &DataFrame, schema: &Schema) -> Result<TransformOutput> {
    check_derivation_inputs(schema)?;
    let projected = project(raw, schema)?;
    let height = projected.height();

    let mut columns: Vec<Column> = Vec::with_capacity(schema.len() + 2);
    let mut coercion = CoercionReport::new();
    let mut timestamps: HashMap<&str, Vec<Option<NaiveDateTime>>> = HashMap::new();

    for declared in schema.columns() {
        let source = projected.column(&declared.name)?.cast(&DataType::String)?;
        let values = source.str()?;
        let mut issue = CoercionIssue::new(declared.name.as_str(), declared.semantic_type);

        let column = match declared.semantic_type {
            SemanticType::Int64 => {
                let mut parsed: Vec<Option<i64>> = Vec::with_capacity(height);
                for raw in values {
                    let value = raw.and_then(coerce_int64);
                    track_failure(&mut issue, raw, value.is_some());
                    parsed.push(value);
                }
                Series::new(declared.name.as_str().into(), parsed).into_column()
            }
            SemanticType::Timestamp => {
                let mut parsed: Vec<Option<NaiveDateTime>> = Vec::with_capacity(height);
                for raw in values {
                    let value = raw.and_then(coerce_timestamp);
                    track_failure(&mut issue, raw, value.is_some());
                    parsed.push(value);
                }
                let column = timestamp_column(&declared.name, &parsed)?;
                timestamps.insert(declared.name.as_str(), parsed);
                column
            }
            SemanticType::Text => {
                let parsed: Vec<Option<String>> = values.into_iter().map(coerce_text).collect();
                Series::new(declared.name.as_str().into(), parsed).into_column()
            }
        };

        if issue.failed_cells > 0 {
            debug!(
                column = %issue.column,
                semantic_type = %issue.semantic_type,
                failed_cells = issue.failed_cells,
                "values could not be coerced and were set to null"
            );
        }
        coercion.push(issue);
        columns.push(column);
    }

    let admit = timestamps.get(ADMITTIME).map(Vec::as_slice).unwrap_or_default();
    let disch = timestamps.get(DISCHTIME).map(Vec::as_slice).unwrap_or_default();
    let edreg = timestamps.get(EDREGTIME).map(Vec::as_slice).unwrap_or_default();
    let edout = timestamps.get(EDOUTTIME).map(Vec::as_slice).unwrap_or_default();

    let stay: Vec<Option<i64>> = (0..height)
        .map(|idx| length_of_stay_days(cell(admit, idx), cell(disch, idx)))
        .collect();
    let ed_stay: Vec<Option<f64>> = (0..height)
        .map(|idx| ed_length_of_stay_minutes(cell(edreg, idx), cell(edout, idx)))
        .collect();

    columns.push(Series::new(LENGTH_OF_STAY_DAYS.into(), stay).into_column());
    columns.push(Series::new(ED_LENGTH_OF_STAY_MINUTES.into(), ed_stay).into_column());

    let frame = DataFrame::new(columns)?;
    debug!(
        columns = frame.width(),
        "appended derived columns {LENGTH_OF_STAY_DAYS}, {ED_LENGTH_OF_STAY_MINUTES}"
    );
    info!(
        rows = frame.height(),
        columns = frame.width(),
        failed_cells = coercion.total_failed_cells(),
        "transformed admissions"
    );

    Ok(TransformOutput { frame, coercion })
}

fn check_derivation_inputs(schema: &Schema) -> Result<()> {
    for (column, derived) in DERIVATION_INPUTS {
        if schema.type_of(column) != Some(SemanticType::Timestamp) {
            return Err(TransformError::DerivationInput {
                column: column.to_string(),
                expected: SemanticType::Timestamp,
                derived,
            });
        }
    }
    Ok(())
}

/// Count a present, non-blank cell that failed to convert.
fn track_failure(issue: &mut CoercionIssue, raw: Option<&str>, converted: bool) {
    if converted {
        return;
    }
    if let Some(raw) = raw.filter(|raw| !is_blank(raw)) {
        issue.record(raw);
    }
}

fn cell(values: &[Option<NaiveDateTime>], idx: usize) -> Option<NaiveDateTime> {
    values.get(idx).copied().flatten()
}

/// Build a naive microsecond timestamp column.
fn timestamp_column(name: &str, values: &[Option<NaiveDateTime>]) -> Result<Column> {
    let micros: Vec<Option<i64>> = values
        .iter()
        .map(|value| value.map(|ts| ts.and_utc().timestamp_micros()))
        .collect();
    let column = Series::new(name.into(), micros)
        .cast(&dtype_for(SemanticType::Timestamp))?
        .into_column();
    Ok(column)
}
