//! Error types for source extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source access ===
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Source file exists but could not be read.
    #[error("failed to read source {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Source format ===
    /// Polars could not parse the file as delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File contains no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row is present but has no usable column names.
    #[error("no header row detected in {path}")]
    NoHeader { path: PathBuf },

    /// Header row names the same column twice.
    #[error("duplicate header '{column}' in {path}")]
    DuplicateHeader { column: String, path: PathBuf },

    /// File is not UTF-8 encoded.
    #[error("unsupported encoding {encoding} in {path}: source must be UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::CsvParse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// The source could not be opened or read.
    pub fn is_access_error(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::FileRead { .. })
    }

    /// The source was readable but is not valid delimited text.
    pub fn is_format_error(&self) -> bool {
        !self.is_access_error()
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileNotFound { path }
            | Self::FileRead { path, .. }
            | Self::CsvParse { path, .. }
            | Self::EmptyCsv { path }
            | Self::NoHeader { path }
            | Self::DuplicateHeader { path, .. }
            | Self::UnsupportedEncoding { path, .. } => path,
        }
    }
}

/// Result type for extraction.
pub type Result<T> = std::result::Result<T, IngestError>;
