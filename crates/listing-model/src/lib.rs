//! Shared model for the listings cleaning step.
//!
//! A dataset is a polars [`DataFrame`](polars::prelude::DataFrame). This crate
//! holds what the transform and the validation checks must agree on: the
//! recognized column names, the inclusive [`PriceRange`], and the
//! [`SchemaError`] raised when a dataset does not have the expected shape.

pub mod error;
pub mod frame;
pub mod price;

pub use error::{Result, SchemaError};
pub use frame::{column_names, require_column};
pub use price::PriceRange;

/// Numeric column used for range filtering. Required.
pub const PRICE: &str = "price";

/// Optional date-like column normalized by the cleaning step.
pub const LAST_REVIEW: &str = "last_review";
