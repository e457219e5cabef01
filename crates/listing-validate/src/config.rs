//! Check identifiers and thresholds.

use listing_model::PriceRange;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::checks;
use crate::failure::CheckFailure;

/// Row-count threshold used when none is configured.
pub const DEFAULT_MIN_ROWS: usize = 100;

/// A validation check that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Dataset has at least `min_rows` rows.
    RowCount,
    /// Every price lies within the configured bounds.
    PriceRange,
}

impl CheckKind {
    /// Every check, in default execution order.
    pub const ALL: [CheckKind; 2] = [CheckKind::RowCount, CheckKind::PriceRange];

    /// Parse a check name (`row-count`, `price-range`; `_` also accepted).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "row-count" => Some(Self::RowCount),
            "price-range" => Some(Self::PriceRange),
            _ => None,
        }
    }

    /// Stable name used on the command line and in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RowCount => "row-count",
            Self::PriceRange => "price-range",
        }
    }

    /// Run this check against `df`.
    ///
    /// # Errors
    ///
    /// Returns the [`CheckFailure`] describing the violated invariant.
    pub fn run(&self, df: &DataFrame, config: &CheckConfig) -> Result<(), CheckFailure> {
        match self {
            Self::RowCount => checks::check_row_count(df, config.min_rows),
            Self::PriceRange => checks::check_price_range(df, config.price_range),
        }
    }
}

/// Thresholds the checks compare against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default = "default_min_rows")]
    pub min_rows: usize,
    pub price_range: PriceRange,
}

fn default_min_rows() -> usize {
    DEFAULT_MIN_ROWS
}

impl CheckConfig {
    /// Config with the given bounds and the default row threshold.
    pub fn new(price_range: PriceRange) -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            price_range,
        }
    }

    #[must_use]
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }
}

/// How [`run_checks`](crate::run_checks) proceeds after a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop at the first failing check.
    pub fail_fast: bool,
}
