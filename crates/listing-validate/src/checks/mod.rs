//! Validation check implementations.
//!
//! Each module performs one check and returns `Ok(())` or the failure.

mod price_range;
mod row_count;

pub use price_range::check_price_range;
pub use row_count::check_row_count;
