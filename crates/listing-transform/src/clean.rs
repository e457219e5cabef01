//! The cleaning transform.
//!
//! 1. Keep rows with `min_price <= price <= max_price`; rows whose price is
//!    null or not numeric are dropped.
//! 2. If `last_review` exists, replace it (same position) with a `Date`
//!    column. Values that fail to parse become null.
//!
//! The input frame is never modified. No other column is touched.

use chrono::{Datelike, NaiveDate};
use listing_model::{LAST_REVIEW, PriceRange};
use polars::prelude::{Column, DataFrame, DataType};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::datetime::parse_review_date;
use crate::error::Result;

/// Days from 0001-01-01 (CE) to 1970-01-01, the polars `Date` epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Row and date counts for one cleaning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    pub input_rows: usize,
    pub output_rows: usize,
    /// `None` when the dataset has no `last_review` column.
    pub unparsed_dates: Option<usize>,
}

impl CleanSummary {
    pub fn dropped_rows(&self) -> usize {
        self.input_rows - self.output_rows
    }
}

/// Cleaned frame plus the counts describing what happened to it.
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    pub frame: DataFrame,
    pub summary: CleanSummary,
}

/// Filter `df` to the inclusive price range and normalize `last_review`.
///
/// # Errors
///
/// Returns [`TransformError::Schema`](crate::TransformError::Schema) if `df`
/// has no `price` column.
pub fn clean(df: &DataFrame, min_price: f64, max_price: f64) -> Result<DataFrame> {
    clean_dataset(df, PriceRange::new(min_price, max_price)).map(|cleaned| cleaned.frame)
}

/// Same as [`clean`], also reporting row and date counts.
pub fn clean_dataset(df: &DataFrame, range: PriceRange) -> Result<CleanedDataset> {
    if range.is_inverted() {
        warn!(min = range.min, max = range.max, "price bounds are inverted; no row can pass");
    }

    let mask = range.mask(df)?;
    let mut frame = df.filter(&mask)?;
    info!(
        %range,
        input_rows = df.height(),
        output_rows = frame.height(),
        "filtered rows by price"
    );

    let unparsed_dates = normalize_last_review(&mut frame)?;
    if let Some(count) = unparsed_dates.filter(|count| *count > 0) {
        warn!(count, "review dates could not be parsed and were set to missing");
    }

    Ok(CleanedDataset {
        summary: CleanSummary {
            input_rows: df.height(),
            output_rows: frame.height(),
            unparsed_dates,
        },
        frame,
    })
}

/// Replace `last_review` with a `Date` column in place.
///
/// Returns the number of non-empty values that could not be parsed, or `None`
/// if the column does not exist. A column that is already `Date` is left as
/// is; a `Datetime` column is truncated to its date.
pub fn normalize_last_review(df: &mut DataFrame) -> Result<Option<usize>> {
    let Ok(column) = df.column(LAST_REVIEW) else {
        debug!("no {LAST_REVIEW} column; skipping date normalization");
        return Ok(None);
    };

    let (dates, unparsed) = match column.dtype() {
        DataType::Date => return Ok(Some(0)),
        DataType::Datetime(_, _) => (column.cast(&DataType::Date)?, 0),
        _ => {
            let text = column.cast(&DataType::String)?;
            let mut unparsed = 0usize;
            let days: Vec<Option<i32>> = text
                .str()?
                .into_iter()
                .map(|value| {
                    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
                    let parsed = parse_review_date(value);
                    if parsed.is_none() {
                        unparsed += 1;
                    }
                    parsed.map(epoch_days)
                })
                .collect();
            let dates = Column::new(LAST_REVIEW.into(), days).cast(&DataType::Date)?;
            (dates, unparsed)
        }
    };

    df.with_column(dates)?;
    Ok(Some(unparsed))
}

fn epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_epoch_days() {
        assert_eq!(epoch_days(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), 0);
        assert_eq!(
            epoch_days(NaiveDate::from_ymd_opt(2019, 5, 21).unwrap()),
            18_037
        );
    }

    #[test]
    fn test_normalize_without_column() {
        let mut df = df! { "price" => &[1i64] }.unwrap();
        assert_eq!(normalize_last_review(&mut df).unwrap(), None);
    }

    #[test]
    fn test_normalize_keeps_position() {
        let mut df = df! {
            "id" => &[1i64, 2],
            "last_review" => &["2019-05-21", "oops"],
            "price" => &[10i64, 20],
        }
        .unwrap();

        let unparsed = normalize_last_review(&mut df).unwrap();

        assert_eq!(unparsed, Some(1));
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["id", "last_review", "price"]);
        assert_eq!(df.column("last_review").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_summary_dropped_rows() {
        let summary = CleanSummary {
            input_rows: 4,
            output_rows: 2,
            unparsed_dates: None,
        };
        assert_eq!(summary.dropped_rows(), 2);
    }
}
