//! Null primary subject identifiers.

use polars::prelude::DataFrame;

use adm_model::{SUBJECT_ID, ValidationWarning};

pub fn check(df: &DataFrame) -> Vec<ValidationWarning> {
    let Ok(column) = df.column(SUBJECT_ID) else {
        return Vec::new();
    };
    let count = column.null_count();
    if count == 0 {
        return Vec::new();
    }
    vec![ValidationWarning::NullSubjectId { count }]
}
