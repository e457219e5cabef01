use listing_model::SchemaError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by the cleaning transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input is not a listings dataset (no `price` column).
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
