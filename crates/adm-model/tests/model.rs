//! Tests for adm-model types.

use adm_model::{
    CoercionIssue, CoercionReport, Schema, SemanticType, ValidationWarning,
    ED_LENGTH_OF_STAY_MINUTES, LENGTH_OF_STAY_DAYS,
};

#[test]
fn output_columns_append_derived_fields() {
    let schema = Schema::admissions();
    let columns = schema.output_columns();
    assert_eq!(columns.len(), schema.len() + 2);
    assert_eq!(columns[schema.len()], LENGTH_OF_STAY_DAYS);
    assert_eq!(columns[schema.len() + 1], ED_LENGTH_OF_STAY_MINUTES);
}

#[test]
fn columns_by_type() {
    let schema = Schema::admissions();
    assert_eq!(
        schema.columns_of(SemanticType::Int64),
        vec!["subject_id", "hadm_id", "hospital_expire_flag"]
    );
    assert_eq!(
        schema.columns_of(SemanticType::Timestamp),
        vec!["admittime", "dischtime", "deathtime", "edregtime", "edouttime"]
    );
    assert_eq!(schema.columns_of(SemanticType::Text).len(), 8);
}

#[test]
fn schema_serializes_in_order() {
    let json = serde_json::to_value(Schema::admissions()).expect("serialize schema");
    let columns = json["columns"].as_array().expect("columns array");
    assert_eq!(columns[0]["name"], "subject_id");
    assert_eq!(columns[0]["semantic_type"], "int64");
    assert_eq!(columns[2]["semantic_type"], "timestamp");
}

#[test]
fn warning_accessors_and_message() {
    let warning = ValidationWarning::NegativeLengthOfStay { count: 3 };
    assert_eq!(warning.code(), "negative_length_of_stay");
    assert_eq!(warning.column(), LENGTH_OF_STAY_DAYS);
    assert_eq!(warning.count(), 3);
    assert_eq!(
        warning.to_string(),
        "negative length_of_stay_days in 3 row(s): discharge precedes admission"
    );
}

#[test]
fn warning_serializes_with_code_tag() {
    let json = serde_json::to_value(ValidationWarning::NullSubjectId { count: 2 })
        .expect("serialize warning");
    assert_eq!(json["code"], "null_subject_id");
    assert_eq!(json["count"], 2);
}

#[test]
fn coercion_report_serializes() {
    let mut issue = CoercionIssue::new("hadm_id", SemanticType::Int64);
    issue.record("abc");
    let mut report = CoercionReport::new();
    report.push(issue);
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["issues"][0]["column"], "hadm_id");
    assert_eq!(json["issues"][0]["failed_cells"], 1);
    assert_eq!(json["issues"][0]["sample_values"][0], "abc");
}
