//! CSV file writing.

use std::fs::{self, File};
use std::path::Path;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::error::{IngestError, Result};

/// Writes `df` as a CSV file with a header row and no index column.
///
/// Nulls are written as empty fields and `Date` columns as `YYYY-MM-DD`.
/// The file is flushed to disk before this returns.
pub fn write_csv_table(df: &DataFrame, path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let mut file = File::create(path).map_err(write_error)?;

    let mut frame = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .map_err(|e| IngestError::CsvWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    file.sync_all().map_err(write_error)?;

    info!(path = %path.display(), rows = df.height(), "wrote dataset");
    Ok(())
}
