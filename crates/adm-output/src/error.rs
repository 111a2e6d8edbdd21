//! Error types for the loader.

use std::io;
use std::path::{Path, PathBuf};

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// The destination's parent directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    ///
    /// The destination may be left partially written.
    #[error("failed to write {path}: {source}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An existing output file could not be opened or hashed.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An existing output file is not valid Parquet.
    #[error("failed to decode parquet file {path}: {source}")]
    ParquetRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

impl OutputError {
    /// Wrap an encoder failure as a write error on `path`.
    pub(crate) fn encode(path: &Path, source: PolarsError) -> Self {
        Self::DestinationWrite {
            path: path.to_path_buf(),
            source: io::Error::other(source),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDirectory { path, .. }
            | Self::DestinationWrite { path, .. }
            | Self::FileRead { path, .. }
            | Self::ParquetRead { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
