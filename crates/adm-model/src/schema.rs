//! Schema contract for the curated admissions dataset.
//!
//! A [`Schema`] is an ordered list of column names with a declared
//! [`SemanticType`]. The order of the columns defines the order of the
//! curated output; the two derived columns are always appended after it.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Primary subject identifier.
pub const SUBJECT_ID: &str = "subject_id";
/// Hospital admission identifier.
pub const HADM_ID: &str = "hadm_id";
pub const ADMITTIME: &str = "admittime";
pub const DISCHTIME: &str = "dischtime";
pub const EDREGTIME: &str = "edregtime";
pub const EDOUTTIME: &str = "edouttime";

/// Whole days between `dischtime` and `admittime`.
pub const LENGTH_OF_STAY_DAYS: &str = "length_of_stay_days";
/// Elapsed minutes between `edouttime` and `edregtime`.
pub const ED_LENGTH_OF_STAY_MINUTES: &str = "ed_length_of_stay_minutes";

/// Derived columns in output order.
pub const DERIVED_COLUMNS: [&str; 2] = [LENGTH_OF_STAY_DAYS, ED_LENGTH_OF_STAY_MINUTES];

/// Declared type of a schema column. Every type is nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// 64-bit signed integer.
    Int64,
    /// Naive (zone-less) date and time.
    Timestamp,
    /// Free text.
    Text,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Int64 => "int64",
            SemanticType::Timestamp => "timestamp",
            SemanticType::Text => "text",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub semantic_type: SemanticType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            name: name.into(),
            semantic_type,
        }
    }
}

/// Ordered, immutable column contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Build a schema, rejecting empty, duplicate, or reserved column names.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ModelError::EmptySchema);
        }
        let mut seen = BTreeSet::new();
        for column in &columns {
            if column.name.trim().is_empty() {
                return Err(ModelError::EmptyColumnName);
            }
            if DERIVED_COLUMNS.contains(&column.name.as_str()) {
                return Err(ModelError::ReservedColumn {
                    name: column.name.clone(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// The canonical hospital admissions contract.
    pub fn admissions() -> Self {
        use SemanticType::{Int64, Text, Timestamp};

        let columns = [
            (SUBJECT_ID, Int64),
            (HADM_ID, Int64),
            (ADMITTIME, Timestamp),
            (DISCHTIME, Timestamp),
            ("deathtime", Timestamp),
            ("admission_type", Text),
            ("admit_provider_id", Text),
            ("admission_location", Text),
            ("discharge_location", Text),
            ("insurance", Text),
            ("language", Text),
            ("marital_status", Text),
            ("race", Text),
            (EDREGTIME, Timestamp),
            (EDOUTTIME, Timestamp),
            ("hospital_expire_flag", Int64),
        ]
        .into_iter()
        .map(|(name, semantic_type)| ColumnSpec::new(name, semantic_type))
        .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn type_of(&self, name: &str) -> Option<SemanticType> {
        self.get(name).map(|column| column.semantic_type)
    }

    /// Names of the columns declared with `semantic_type`, in schema order.
    pub fn columns_of(&self, semantic_type: SemanticType) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.semantic_type == semantic_type)
            .map(|column| column.name.as_str())
            .collect()
    }

    /// Curated output column names: schema order, then the derived columns.
    pub fn output_columns(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names().map(str::to_string).collect();
        names.extend(DERIVED_COLUMNS.iter().map(|name| (*name).to_string()));
        names
    }
}
