//! Parquet writer and reader.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{
    DataFrame, ParquetCompression, ParquetReader, ParquetWriter, SerReader, StatisticsOptions,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::checksum::file_sha256;
use crate::error::{OutputError, Result};

/// Writer configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub compression: ParquetCompression,
    /// Write per-column min/max/null-count statistics.
    pub statistics: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            compression: ParquetCompression::Snappy,
            statistics: true,
        }
    }
}

impl LoadOptions {
    pub fn with_compression(mut self, compression: ParquetCompression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_statistics(mut self, statistics: bool) -> Self {
        self.statistics = statistics;
        self
    }

    fn statistics_options(&self) -> StatisticsOptions {
        if self.statistics {
            StatisticsOptions::full()
        } else {
            StatisticsOptions::empty()
        }
    }
}

/// What was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: u64,
    pub sha256: String,
}

/// Persist `df` to `destination` as one Parquet file.
///
/// Missing parent directories are created first. Row order is preserved and
/// no index column is added. The write is not atomic: on failure the
/// destination may exist and be incomplete.
pub fn load(df: &mut DataFrame, destination: &Path, options: &LoadOptions) -> Result<LoadSummary> {
    ensure_parent_dir(destination)?;

    let write_error = |source| OutputError::DestinationWrite {
        path: destination.to_path_buf(),
        source,
    };

    let file = File::create(destination).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    ParquetWriter::new(&mut writer)
        .with_compression(options.compression)
        .with_statistics(options.statistics_options())
        .finish(df)
        .map_err(|e| OutputError::encode(destination, e))?;
    writer.flush().map_err(write_error)?;
    drop(writer);

    let bytes = fs::metadata(destination).map_err(write_error)?.len();
    let sha256 = file_sha256(destination)?;
    let summary = LoadSummary {
        path: destination.to_path_buf(),
        rows: df.height(),
        bytes,
        sha256,
    };
    info!(
        path = %summary.path.display(),
        rows = summary.rows,
        bytes = summary.bytes,
        "wrote parquet output"
    );
    Ok(summary)
}

/// Read a Parquet file into memory.
pub fn read_parquet(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| OutputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    ParquetReader::new(file)
        .finish()
        .map_err(|source| OutputError::ParquetRead {
            path: path.to_path_buf(),
            source,
        })
}

fn ensure_parent_dir(destination: &Path) -> Result<()> {
    let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }
    debug!(dir = %parent.display(), "creating output directory");
    fs::create_dir_all(parent).map_err(|source| OutputError::CreateDirectory {
        path: parent.to_path_buf(),
        source,
    })
}
