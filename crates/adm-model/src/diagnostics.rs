//! Cell-level coercion diagnostics.
//!
//! Coercion never fails the pipeline: a cell that cannot be converted to its
//! declared type becomes null. The transformer records those cells here so
//! callers can see failure rates without aborting the run.

use serde::Serialize;

use crate::schema::SemanticType;

/// Maximum number of raw sample values kept per column.
pub const MAX_SAMPLE_VALUES: usize = 5;

/// Cells of one column that were present in the source but degraded to null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoercionIssue {
    pub column: String,
    pub semantic_type: SemanticType,
    pub failed_cells: usize,
    pub sample_values: Vec<String>,
}

impl CoercionIssue {
    pub fn new(column: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            column: column.into(),
            semantic_type,
            failed_cells: 0,
            sample_values: Vec::new(),
        }
    }

    /// Record one failed raw value.
    pub fn record(&mut self, raw: &str) {
        self.failed_cells += 1;
        if self.sample_values.len() < MAX_SAMPLE_VALUES
            && !self.sample_values.iter().any(|sample| sample == raw)
        {
            self.sample_values.push(raw.to_string());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoercionReport {
    pub issues: Vec<CoercionIssue>,
}

impl CoercionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep an issue only if at least one cell failed.
    pub fn push(&mut self, issue: CoercionIssue) {
        if issue.failed_cells > 0 {
            self.issues.push(issue);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn total_failed_cells(&self) -> usize {
        self.issues.iter().map(|issue| issue.failed_cells).sum()
    }

    pub fn issue_for(&self, column: &str) -> Option<&CoercionIssue> {
        self.issues.iter().find(|issue| issue.column == column)
    }
}
