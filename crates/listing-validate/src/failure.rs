use listing_model::{PriceRange, SchemaError};
use thiserror::Error;

/// Why a check did not pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckFailure {
    /// The dataset is missing a column the check reads.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Fewer rows than the configured minimum.
    #[error("Dataset has only {observed} rows; expected at least {required}.")]
    RowCountViolation { observed: usize, required: usize },

    /// At least one price lies outside the bounds.
    #[error("Found {out_of_range} prices outside allowed range {range}.")]
    PriceRangeViolation {
        range: PriceRange,
        out_of_range: usize,
    },
}

impl CheckFailure {
    /// Failure category name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Schema(_) => "SchemaError",
            Self::RowCountViolation { .. } => "RowCountViolation",
            Self::PriceRangeViolation { .. } => "PriceRangeViolation",
        }
    }
}
