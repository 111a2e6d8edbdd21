//! Negative admission and ED stays.
//!
//! Admission stays are judged on the exact timestamps: `length_of_stay_days`
//! truncates toward zero, so a discharge a few hours before admission
//! derives to `0`. The derived column is the fallback when the timestamps
//! are absent.

use polars::prelude::{Column, DataFrame, DataType};

use adm_model::{
    ADMITTIME, DISCHTIME, ED_LENGTH_OF_STAY_MINUTES, LENGTH_OF_STAY_DAYS, ValidationWarning,
};

pub fn check(df: &DataFrame) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let negative_days = count_reversed_stays(df).unwrap_or_else(|| count_negative_days(df));
    if negative_days > 0 {
        warnings.push(ValidationWarning::NegativeLengthOfStay {
            count: negative_days,
        });
    }

    let negative_minutes = count_negative_minutes(df);
    if negative_minutes > 0 {
        warnings.push(ValidationWarning::NegativeEdLengthOfStay {
            count: negative_minutes,
        });
    }

    warnings
}

/// Rows with `dischtime` earlier than `admittime`, if both are timestamps.
fn count_reversed_stays(df: &DataFrame) -> Option<usize> {
    let admit = df.column(ADMITTIME).ok()?;
    let disch = df.column(DISCHTIME).ok()?;
    if !matches!(admit.dtype(), DataType::Datetime(..)) || admit.dtype() != disch.dtype() {
        return None;
    }
    let admit = physical(admit)?;
    let disch = physical(disch)?;
    let (admit, disch) = (admit.i64().ok()?, disch.i64().ok()?);

    let count = admit
        .into_iter()
        .zip(disch)
        .filter(|pair| matches!(pair, (Some(start), Some(end)) if end < start))
        .count();
    Some(count)
}

fn physical(column: &Column) -> Option<Column> {
    column.cast(&DataType::Int64).ok()
}

fn count_negative_days(df: &DataFrame) -> usize {
    let Some(values) = df
        .column(LENGTH_OF_STAY_DAYS)
        .ok()
        .and_then(|column| column.i64().ok())
    else {
        return 0;
    };
    values.into_iter().flatten().filter(|days| *days < 0).count()
}

fn count_negative_minutes(df: &DataFrame) -> usize {
    let Some(values) = df
        .column(ED_LENGTH_OF_STAY_MINUTES)
        .ok()
        .and_then(|column| column.f64().ok())
    else {
        return 0;
    };
    values
        .into_iter()
        .flatten()
        .filter(|minutes| *minutes < 0.0)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    #[test]
    fn test_negative_values_counted() {
        let df = DataFrame::new(vec![
            Column::new(LENGTH_OF_STAY_DAYS.into(), [Some(2i64), Some(-1), None, Some(0)]),
            Column::new(
                ED_LENGTH_OF_STAY_MINUTES.into(),
                [Some(45.0f64), None, Some(-0.5), Some(-10.0)],
            ),
        ])
        .unwrap();
        assert_eq!(
            check(&df),
            vec![
                ValidationWarning::NegativeLengthOfStay { count: 1 },
                ValidationWarning::NegativeEdLengthOfStay { count: 2 },
            ]
        );
    }

    fn stamps(name: &str, micros: &[Option<i64>]) -> Column {
        Column::new(name.into(), micros)
            .cast(&DataType::Datetime(polars::prelude::TimeUnit::Microseconds, None))
            .unwrap()
    }

    #[test]
    fn test_sub_day_reversal_detected_from_timestamps() {
        let hour = 3_600_000_000i64;
        let df = DataFrame::new(vec![
            stamps(ADMITTIME, &[Some(10 * hour), Some(0), None]),
            stamps(DISCHTIME, &[Some(4 * hour), Some(30 * hour), Some(0)]),
            Column::new(LENGTH_OF_STAY_DAYS.into(), [Some(0i64), Some(1), None]),
        ])
        .unwrap();
        assert_eq!(
            check(&df),
            vec![ValidationWarning::NegativeLengthOfStay { count: 1 }]
        );
    }

    #[test]
    fn test_derived_fallback_without_timestamps() {
        let df = DataFrame::new(vec![Column::new(LENGTH_OF_STAY_DAYS.into(), [0i64, 3])]).unwrap();
        assert!(check(&df).is_empty());
    }

    #[test]
    fn test_wrong_dtype_skips() {
        let df = DataFrame::new(vec![Column::new(LENGTH_OF_STAY_DAYS.into(), ["-1"])]).unwrap();
        assert!(check(&df).is_empty());
    }
}
