//! Property tests: coercion is total and projection is independent of extra columns.

use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;

use adm_model::{Schema, SemanticType};
use adm_transform::{CellValue, coerce, coerce_int64, coerce_text, coerce_timestamp, transform};

proptest! {
    #[test]
    fn coercion_never_panics(raw in ".*") {
        let _ = coerce_int64(&raw);
        let _ = coerce_timestamp(&raw);
        let _ = coerce_text(Some(&raw));
    }

    #[test]
    fn integers_round_trip(value in any::<i64>()) {
        prop_assert_eq!(coerce_int64(&value.to_string()), Some(value));
    }

    #[test]
    fn padded_integers_parse(value in -1_000_000i64..1_000_000, pad in 0usize..4) {
        let raw = format!("{}{}{}", " ".repeat(pad), value, " ".repeat(pad));
        prop_assert_eq!(coerce(Some(&raw), SemanticType::Int64), Some(CellValue::Int64(value)));
    }

    #[test]
    fn non_empty_text_is_kept(raw in ".+") {
        prop_assert_eq!(coerce_text(Some(&raw)), Some(raw.clone()));
    }

    #[test]
    fn output_shape_ignores_extra_columns(
        extras in 0usize..5,
        cells in proptest::collection::vec(proptest::option::of("[ -~]{0,12}"), 1..6),
    ) {
        let schema = Schema::admissions();
        let mut columns: Vec<Column> = schema
            .names()
            .map(|name| Column::new(name.into(), cells.clone()))
            .collect();
        for idx in 0..extras {
            columns.insert(idx, Column::new(format!("extra_{idx}").into(), cells.clone()));
        }
        let raw = DataFrame::new(columns).unwrap();

        let output = transform(&raw, &schema).unwrap();
        prop_assert_eq!(output.frame.width(), schema.len() + 2);
        prop_assert_eq!(output.frame.height(), cells.len());
        let names: Vec<String> = output
            .frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        prop_assert_eq!(names, schema.output_columns());
    }
}
