//! Admission identifier uniqueness.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use adm_model::{HADM_ID, ValidationWarning};

/// Rows whose non-null `hadm_id` repeats an earlier row.
pub fn check(df: &DataFrame) -> Vec<ValidationWarning> {
    let Some(values) = df.column(HADM_ID).ok().and_then(|column| column.i64().ok()) else {
        return Vec::new();
    };

    let mut seen: HashSet<i64> = HashSet::with_capacity(values.len());
    let count = values
        .into_iter()
        .flatten()
        .filter(|id| !seen.insert(*id))
        .count();

    if count == 0 {
        return Vec::new();
    }
    vec![ValidationWarning::DuplicateAdmissionId { count }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    #[test]
    fn test_repeats_counted_once_per_extra_row() {
        let df = DataFrame::new(vec![Column::new(
            HADM_ID.into(),
            [Some(1i64), Some(2), Some(1), Some(1), None, None],
        )])
        .unwrap();
        assert_eq!(
            check(&df),
            vec![ValidationWarning::DuplicateAdmissionId { count: 2 }]
        );
    }

    #[test]
    fn test_nulls_are_not_duplicates() {
        let df = DataFrame::new(vec![Column::new(
            HADM_ID.into(),
            [Some(1i64), None, None],
        )])
        .unwrap();
        assert!(check(&df).is_empty());
    }
}
