//! Validator behavior on frames produced by the transformer.

use polars::prelude::{Column, DataFrame};

use adm_model::{Schema, ValidationWarning};
use adm_transform::transform;
use adm_validate::validate;

const HEADER: [&str; 16] = [
    "subject_id",
    "hadm_id",
    "admittime",
    "dischtime",
    "deathtime",
    "admission_type",
    "admit_provider_id",
    "admission_location",
    "discharge_location",
    "insurance",
    "language",
    "marital_status",
    "race",
    "edregtime",
    "edouttime",
    "hospital_expire_flag",
];

struct Row {
    subject_id: Option<&'static str>,
    hadm_id: &'static str,
    admittime: &'static str,
    dischtime: &'static str,
}

fn curated(rows: &[Row]) -> DataFrame {
    let columns: Vec<Column> = HEADER
        .iter()
        .map(|name| {
            let values: Vec<Option<&str>> = rows
                .iter()
                .map(|row| match *name {
                    "subject_id" => row.subject_id,
                    "hadm_id" => Some(row.hadm_id),
                    "admittime" => Some(row.admittime),
                    "dischtime" => Some(row.dischtime),
                    "edregtime" => Some("2024-01-01 08:00"),
                    "edouttime" => Some("2024-01-01 09:30"),
                    "hospital_expire_flag" => Some("0"),
                    _ => Some("x"),
                })
                .collect();
            Column::new((*name).into(), values)
        })
        .collect();
    let raw = DataFrame::new(columns).unwrap();
    transform(&raw, &Schema::admissions()).unwrap().frame
}

#[test]
fn clean_frame_has_no_warnings() {
    let df = curated(&[
        Row {
            subject_id: Some("1"),
            hadm_id: "10",
            admittime: "2024-01-01 10:00",
            dischtime: "2024-01-03 15:00",
        },
        Row {
            subject_id: Some("2"),
            hadm_id: "11",
            admittime: "2024-02-01 10:00",
            dischtime: "2024-02-01 12:00",
        },
    ]);
    let report = validate(&df);
    assert!(report.is_clean());
    assert_eq!(report.row_count, 2);
}

#[test]
fn discharge_before_admission_warns_exactly_once() {
    let df = curated(&[
        Row {
            subject_id: Some("1"),
            hadm_id: "10",
            admittime: "2024-01-05 10:00",
            dischtime: "2024-01-02 10:00",
        },
        Row {
            subject_id: Some("2"),
            hadm_id: "11",
            admittime: "2024-01-01 10:00",
            dischtime: "2024-01-03 15:00",
        },
    ]);
    let report = validate(&df);
    assert_eq!(
        report.warnings,
        vec![ValidationWarning::NegativeLengthOfStay { count: 1 }]
    );
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn discharge_hours_before_admission_warns() {
    let df = curated(&[
        Row {
            subject_id: Some("1"),
            hadm_id: "10",
            admittime: "2024-01-02 10:00:00",
            dischtime: "2024-01-02 04:00:00",
        },
        Row {
            subject_id: Some("2"),
            hadm_id: "11",
            admittime: "2024-01-01 10:00",
            dischtime: "2024-01-01 18:00",
        },
    ]);
    let stay = df.column("length_of_stay_days").unwrap().i64().unwrap();
    assert_eq!(stay.get(0), Some(0));

    let report = validate(&df);
    assert_eq!(
        report.warnings,
        vec![ValidationWarning::NegativeLengthOfStay { count: 1 }]
    );
}

#[test]
fn null_subject_and_duplicate_admission_reported_in_order() {
    let df = curated(&[
        Row {
            subject_id: None,
            hadm_id: "10",
            admittime: "2024-01-01 10:00",
            dischtime: "2024-01-02 10:00",
        },
        Row {
            subject_id: Some("not-a-number"),
            hadm_id: "10",
            admittime: "2024-01-01 10:00",
            dischtime: "2024-01-02 10:00",
        },
    ]);
    let report = validate(&df);
    let codes: Vec<&str> = report.warnings.iter().map(ValidationWarning::code).collect();
    assert_eq!(codes, vec!["null_subject_id", "duplicate_admission_id"]);
    assert_eq!(report.find("null_subject_id").map(ValidationWarning::count), Some(2));
}

#[test]
fn validation_does_not_modify_frame() {
    let df = curated(&[
        Row {
            subject_id: None,
            hadm_id: "10",
            admittime: "2024-01-05 10:00",
            dischtime: "2024-01-02 10:00",
        },
        Row {
            subject_id: Some("2"),
            hadm_id: "10",
            admittime: "2024-01-01 10:00",
            dischtime: "2024-01-03 15:00",
        },
    ]);
    let before = df.clone();
    let report = validate(&df);
    assert_eq!(report.warning_count(), 3);
    assert!(df.equals_missing(&before));
    assert_eq!(df.get_column_names(), before.get_column_names());
}

#[test]
fn report_serializes_with_codes() {
    let df = curated(&[Row {
        subject_id: None,
        hadm_id: "10",
        admittime: "2024-01-01 10:00",
        dischtime: "2024-01-02 10:00",
    }]);
    let json = serde_json::to_value(validate(&df)).unwrap();
    assert_eq!(json["row_count"], 1);
    assert_eq!(json["warnings"][0]["code"], "null_subject_id");
    assert_eq!(json["warnings"][0]["count"], 1);
}
