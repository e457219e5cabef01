//! Inclusive price bounds and the row mask derived from them.
//!
//! The transform filters with [`PriceRange::mask`] and the price check counts
//! with [`PriceRange::count_outside`], so both sides agree on what "in range"
//! means: `min <= price <= max`, with null, unparseable, and NaN prices
//! always outside.

use std::fmt;

use polars::prelude::{BooleanChunked, DataFrame, DataType, NewChunkedArray};
use serde::{Deserialize, Serialize};

use crate::PRICE;
use crate::error::{Result, SchemaError};
use crate::frame::require_column;

/// Closed interval `[min, max]` of accepted prices.
///
/// `min > max` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// True when no price can satisfy the bounds.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Row mask: `true` where the row's price lies within the bounds.
    ///
    /// The `price` column is cast non-strictly to `Float64`, so any value that
    /// is not numeric becomes null and yields `false`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] if `price` is absent or cannot be cast.
    pub fn mask(&self, df: &DataFrame) -> Result<BooleanChunked> {
        let keep = self.keep_flags(df)?;
        Ok(BooleanChunked::from_iter_values(PRICE.into(), keep.into_iter()))
    }

    /// Number of rows whose price is outside the bounds (or missing).
    ///
    /// # Errors
    ///
    /// Same as [`PriceRange::mask`].
    pub fn count_outside(&self, df: &DataFrame) -> Result<usize> {
        let keep = self.keep_flags(df)?;
        Ok(keep.iter().filter(|kept| !**kept).count())
    }

    fn keep_flags(&self, df: &DataFrame) -> Result<Vec<bool>> {
        let prices = require_column(df, PRICE)?
            .cast(&DataType::Float64)
            .map_err(|e| price_type_error(&e))?;
        let values = prices.f64().map_err(|e| price_type_error(&e))?;
        Ok(values
            .into_iter()
            .map(|price| price.is_some_and(|value| self.contains(value)))
            .collect())
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

fn price_type_error(err: &impl fmt::Display) -> SchemaError {
    SchemaError::ColumnType {
        column: PRICE.to_string(),
        expected: "a number",
        message: err.to_string(),
    }
}
