use serde::Serialize;

use adm_model::ValidationWarning;

/// Findings of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Rows inspected.
    pub row_count: usize,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new(row_count: usize, warnings: Vec<ValidationWarning>) -> Self {
        Self {
            row_count,
            warnings,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Look up a finding by its stable code.
    pub fn find(&self, code: &str) -> Option<&ValidationWarning> {
        self.warnings.iter().find(|warning| warning.code() == code)
    }
}
