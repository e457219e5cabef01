//! Price range conformance.

use listing_model::PriceRange;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::failure::CheckFailure;

/// Check that every `price` lies within `range` (inclusive).
///
/// Null or non-numeric prices count as out of range. An empty dataset passes.
pub fn check_price_range(df: &DataFrame, range: PriceRange) -> Result<(), CheckFailure> {
    let out_of_range = range.count_outside(df)?;
    debug!(%range, out_of_range, rows = df.height(), "checked price range");
    if out_of_range > 0 {
        return Err(CheckFailure::PriceRangeViolation {
            range,
            out_of_range,
        });
    }
    Ok(())
}
