//! Whole-file CSV extraction into an untyped DataFrame.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::read(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::read(path, e))?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads and normalizes the header row.
pub fn read_csv_headers(path: &Path) -> Result<CsvHeaders> {
    let file = File::open(path).map_err(|e| IngestError::read(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut record = csv::StringRecord::new();
    let has_row = reader.read_record(&mut record).map_err(|e| {
        if !e.is_io_error() {
            return IngestError::parse(path, e);
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => IngestError::read(path, io),
            other => IngestError::parse(path, format!("{other:?}")),
        }
    })?;
    if !has_row {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let headers = CsvHeaders::from_raw(record.iter());
    if headers.is_empty() || headers.is_blank() {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }
    if let Some(column) = headers.first_duplicate() {
        return Err(IngestError::DuplicateHeader {
            column: column.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads the whole source into a DataFrame with every column as text.
///
/// Schema inference is disabled, so values are kept exactly as read and empty
/// fields are null. Column names are the normalized header names.
pub fn extract(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| IngestError::read(path, e))?;
    validate_encoding(path)?;
    let headers = read_csv_headers(path)?;
    debug!(
        path = %path.display(),
        columns = headers.len(),
        "source header read"
    );

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::parse(path, e))?
        .finish()
        .map_err(|e| IngestError::parse(path, e))?;

    if df.width() != headers.len() {
        return Err(IngestError::parse(
            path,
            format!(
                "header declares {} columns but {} were read",
                headers.len(),
                df.width()
            ),
        ));
    }
    let needs_rename = df
        .get_column_names()
        .iter()
        .zip(&headers.columns)
        .any(|(read, normalized)| read.as_str() != normalized.as_str());
    if needs_rename {
        df.set_column_names(headers.columns.iter().map(String::as_str))
            .map_err(|e| IngestError::parse(path, e))?;
    }

    if df.height() == 0 {
        warn!(path = %path.display(), "source contains a header but no rows");
    }
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "source extracted"
    );
    Ok(df)
}
