//! CSV header parsing and normalization.

use std::collections::BTreeSet;

/// Column names from the header row of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Builds headers from raw header cells, normalizing each name.
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: raw
                .into_iter()
                .map(|value| normalize_header(value.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when there is no non-empty column name.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(String::is_empty)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// First column name that appears more than once.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = BTreeSet::new();
        self.columns
            .iter()
            .find(|column| !column.is_empty() && !seen.insert(column.as_str()))
            .map(String::as_str)
    }
}

/// Normalizes a header value by stripping a byte-order mark and whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
