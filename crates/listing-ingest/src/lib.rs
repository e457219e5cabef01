//! Listings data ingestion.
//!
//! Reads a delimited text file (one header row, one row per record) into a
//! polars [`DataFrame`](polars::prelude::DataFrame) and writes one back in the
//! same layout.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use listing_ingest::{read_csv_table, write_csv_table};
//!
//! let df = read_csv_table(Path::new("sample.csv"))?;
//! write_csv_table(&df, Path::new("clean_sample.csv"))?;
//! ```

mod error;
mod reader;
mod writer;

pub use error::{IngestError, Result};
pub use reader::{read_csv_table, validate_encoding};
pub use writer::write_csv_table;
