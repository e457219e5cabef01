//! Validation report.

use crate::config::CheckKind;
use crate::failure::CheckFailure;

/// Result of one executed check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub check: CheckKind,
    pub result: Result<(), CheckFailure>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Executed checks, in execution order.
    pub outcomes: Vec<CheckOutcome>,
    /// Checks not run because an earlier one failed in fail-fast mode.
    pub skipped: Vec<CheckKind>,
}

impl ValidationReport {
    /// True if no executed check failed.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Failures in execution order.
    pub fn failures(&self) -> impl Iterator<Item = (CheckKind, &CheckFailure)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err().map(|f| (outcome.check, f)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// First failure, if any.
    ///
    /// # Errors
    ///
    /// Returns the first failing check's [`CheckFailure`].
    pub fn into_result(self) -> Result<(), CheckFailure> {
        self.outcomes
            .into_iter()
            .find_map(|outcome| outcome.result.err())
            .map_or(Ok(()), Err)
    }
}
