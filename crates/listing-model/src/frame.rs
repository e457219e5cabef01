//! Column lookup helpers.

use polars::prelude::{Column, DataFrame, PlSmallStr};

use crate::error::{Result, SchemaError};

/// Column names of `df` in their original order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(PlSmallStr::to_string)
        .collect()
}

/// Look up a column that must be present.
///
/// # Errors
///
/// Returns [`SchemaError::MissingColumn`] listing the available columns.
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| SchemaError::MissingColumn {
        column: name.to_string(),
        available: column_names(df).join(", "),
    })
}
