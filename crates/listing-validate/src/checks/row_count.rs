//! Minimum row count.

use polars::prelude::DataFrame;

use crate::failure::CheckFailure;

/// Check that `df` has at least `min_rows` rows.
pub fn check_row_count(df: &DataFrame, min_rows: usize) -> Result<(), CheckFailure> {
    let observed = df.height();
    if observed < min_rows {
        return Err(CheckFailure::RowCountViolation {
            observed,
            required: min_rows,
        });
    }
    Ok(())
}
