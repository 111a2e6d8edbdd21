//! Post-transform validation for curated admissions data.
//!
//! Checks are read-only and never fail: findings are returned as
//! [`ValidationWarning`] values and the frame is left untouched.

mod checks;
mod report;

use polars::prelude::DataFrame;
use tracing::{info, warn};

use adm_model::ValidationWarning;

pub use report::ValidationReport;

/// Run every check against the curated frame.
pub fn validate(df: &DataFrame) -> ValidationReport {
    let warnings: Vec<ValidationWarning> = checks::run_all(df);
    for warning in &warnings {
        warn!(
            code = warning.code(),
            column = warning.column(),
            rows = warning.count(),
            "{warning}"
        );
    }

    let report = ValidationReport::new(df.height(), warnings);
    info!(
        rows = report.row_count,
        warnings = report.warning_count(),
        "validation complete"
    );
    report
}
