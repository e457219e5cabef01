//! Validation checks for listings datasets.
//!
//! Two independent checks guard the cleaned output:
//!
//! - **Row count**: the dataset has at least `min_rows` rows
//! - **Price range**: every `price` lies within the configured inclusive bounds
//!
//! Checks read the dataset only. They can run in any order and in any subset;
//! [`run_checks`] executes a selection and collects the outcomes.
//!
//! # Example
//!
//! ```ignore
//! use listing_model::PriceRange;
//! use listing_validate::{CheckConfig, CheckKind, RunOptions, run_checks};
//!
//! let config = CheckConfig::new(PriceRange::new(10.0, 350.0));
//! let report = run_checks(&df, &config, &CheckKind::ALL, RunOptions::default());
//! report.into_result()?;
//! ```

mod checks;
mod config;
mod failure;
mod report;

pub use checks::{check_price_range, check_row_count};
pub use config::{CheckConfig, CheckKind, DEFAULT_MIN_ROWS, RunOptions};
pub use failure::CheckFailure;
pub use report::{CheckOutcome, ValidationReport};

use polars::prelude::DataFrame;
use tracing::{error, info};

/// Run the selected checks against `df`.
///
/// An empty selection runs every check. Duplicates are run once, in the order
/// first given. With [`RunOptions::fail_fast`], checks after the first failure
/// are recorded as skipped instead of run.
pub fn run_checks(
    df: &DataFrame,
    config: &CheckConfig,
    selection: &[CheckKind],
    options: RunOptions,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for check in resolve_selection(selection) {
        if options.fail_fast && !report.passed() {
            report.skipped.push(check);
            continue;
        }

        let result = check.run(df, config);
        match &result {
            Ok(()) => info!(check = check.label(), "check passed"),
            Err(failure) => error!(check = check.label(), kind = failure.kind(), "{failure}"),
        }
        report.outcomes.push(CheckOutcome { check, result });
    }

    report
}

fn resolve_selection(selection: &[CheckKind]) -> Vec<CheckKind> {
    let requested = if selection.is_empty() {
        &CheckKind::ALL[..]
    } else {
        selection
    };
    let mut resolved = Vec::with_capacity(requested.len());
    for check in requested {
        if !resolved.contains(check) {
            resolved.push(*check);
        }
    }
    resolved
}
