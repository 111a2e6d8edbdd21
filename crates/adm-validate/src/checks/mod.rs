//! Validation check modules.
//!
//! Each module inspects one invariant. A check whose column is absent or
//! not of the expected type is skipped.

mod identifier;
mod stay;
mod uniqueness;

use polars::prelude::DataFrame;

use adm_model::ValidationWarning;

/// Run all checks in a fixed order.
pub fn run_all(df: &DataFrame) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // 1. Primary subject identifier present
    warnings.extend(identifier::check(df));

    // 2. Admission and ED stays not negative
    warnings.extend(stay::check(df));

    // 3. Admission identifiers unique
    warnings.extend(uniqueness::check(df));

    warnings
}
