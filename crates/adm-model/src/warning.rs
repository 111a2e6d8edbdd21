//! Non-fatal data-quality findings.

use std::fmt;

use serde::Serialize;

use crate::schema::{ED_LENGTH_OF_STAY_MINUTES, HADM_ID, LENGTH_OF_STAY_DAYS, SUBJECT_ID};

/// A validation finding. Warnings never stop the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// Rows without a primary subject identifier.
    NullSubjectId { count: usize },
    /// Rows discharged before admission.
    NegativeLengthOfStay { count: usize },
    /// Rows that left the emergency department before registering.
    NegativeEdLengthOfStay { count: usize },
    /// Non-null admission identifiers that occur more than once.
    DuplicateAdmissionId { count: usize },
}

impl ValidationWarning {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullSubjectId { .. } => "null_subject_id",
            Self::NegativeLengthOfStay { .. } => "negative_length_of_stay",
            Self::NegativeEdLengthOfStay { .. } => "negative_ed_length_of_stay",
            Self::DuplicateAdmissionId { .. } => "duplicate_admission_id",
        }
    }

    /// Column the finding refers to.
    pub fn column(&self) -> &'static str {
        match self {
            Self::NullSubjectId { .. } => SUBJECT_ID,
            Self::NegativeLengthOfStay { .. } => LENGTH_OF_STAY_DAYS,
            Self::NegativeEdLengthOfStay { .. } => ED_LENGTH_OF_STAY_MINUTES,
            Self::DuplicateAdmissionId { .. } => HADM_ID,
        }
    }

    /// Number of affected rows.
    pub fn count(&self) -> usize {
        match self {
            Self::NullSubjectId { count }
            | Self::NegativeLengthOfStay { count }
            | Self::NegativeEdLengthOfStay { count }
            | Self::DuplicateAdmissionId { count } => *count,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullSubjectId { count } => {
                write!(f, "null {SUBJECT_ID} values detected in {count} row(s)")
            }
            Self::NegativeLengthOfStay { count } => write!(
                f,
                "negative {LENGTH_OF_STAY_DAYS} in {count} row(s): discharge precedes admission"
            ),
            Self::NegativeEdLengthOfStay { count } => write!(
                f,
                "negative {ED_LENGTH_OF_STAY_MINUTES} in {count} row(s): ED exit precedes registration"
            ),
            Self::DuplicateAdmissionId { count } => {
                write!(f, "duplicate {HADM_ID} values in {count} row(s)")
            }
        }
    }
}
