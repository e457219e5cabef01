//! Cleaning transform for listings data.
//!
//! - **clean**: keep rows whose `price` lies in an inclusive range, then
//!   normalize `last_review` to a `Date` column
//! - **datetime**: best-effort date parsing where failures become nulls

pub mod clean;
pub mod datetime;
mod error;

pub use clean::{CleanSummary, CleanedDataset, clean, clean_dataset, normalize_last_review};
pub use datetime::parse_review_date;
pub use error::{Result, TransformError};
