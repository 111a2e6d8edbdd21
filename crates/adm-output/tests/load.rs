//! Loader round-trip and failure tests.

use std::fs;

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series, TimeUnit};

use adm_output::{LoadOptions, OutputError, file_sha256, load, read_parquet};

fn curated_frame() -> DataFrame {
    let admittime = Series::new(
        "admittime".into(),
        [Some(1_704_103_200_000_000i64), None, Some(1_704_189_600_000_000)],
    )
    .cast(&DataType::Datetime(TimeUnit::Microseconds, None))
    .unwrap()
    .into_column();

    DataFrame::new(vec![
        Column::new("subject_id".into(), [Some(10001i64), None, Some(10003)]),
        admittime,
        Column::new("race".into(), [Some("WHITE"), Some("ASIAN"), None]),
        Column::new("length_of_stay_days".into(), [Some(2i64), None, Some(-1)]),
        Column::new(
            "ed_length_of_stay_minutes".into(),
            [Some(45.0f64), Some(1.5), None],
        ),
    ])
    .unwrap()
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn round_trip_preserves_names_order_types_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("admissions.parquet");
    let mut df = curated_frame();

    let summary = load(&mut df, &path, &LoadOptions::default()).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.path, path);
    assert!(summary.bytes > 0);
    assert_eq!(summary.sha256.len(), 64);

    let back = read_parquet(&path).unwrap();
    assert_eq!(back.height(), 3);
    assert_eq!(names(&back), names(&df));
    assert_eq!(back.dtypes(), df.dtypes());
    assert!(back.equals_missing(&df));
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curated").join("2024").join("admissions.parquet");
    let mut df = curated_frame();

    load(&mut df, &path, &LoadOptions::default()).unwrap();
    assert!(path.is_file());
}

#[test]
fn repeated_writes_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.parquet");
    let second = dir.path().join("second.parquet");

    let a = load(&mut curated_frame(), &first, &LoadOptions::default()).unwrap();
    let b = load(&mut curated_frame(), &second, &LoadOptions::default()).unwrap();
    assert_eq!(a.sha256, b.sha256);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert_eq!(file_sha256(&first).unwrap(), a.sha256);
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("admissions.parquet");
    fs::write(&path, b"stale").unwrap();

    load(&mut curated_frame(), &path, &LoadOptions::default()).unwrap();
    assert_eq!(read_parquet(&path).unwrap().height(), 3);
}

#[test]
fn write_failure_names_destination() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("taken");
    fs::create_dir(&destination).unwrap();

    let err = load(&mut curated_frame(), &destination, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, OutputError::DestinationWrite { .. }));
    assert_eq!(err.path(), destination.as_path());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn reading_non_parquet_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not.parquet");
    fs::write(&path, b"subject_id,hadm_id\n1,2\n").unwrap();

    let err = read_parquet(&path).unwrap_err();
    assert!(matches!(err, OutputError::ParquetRead { .. }));
}
