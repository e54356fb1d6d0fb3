//! Business rules on audit payloads, and the errors they report.
//!
//! Checks are expressed with Stillwater's `Validation` so that every
//! violated rule is reported at once rather than only the first.

use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single business rule violated by an event payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("A summary is required to complete the audit.")]
    SummaryRequired,
}

/// Every rule violation found for one event, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<ValidationError>);

impl Violations {
    /// Iterate over the violations in rule order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Number of violated rules.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether a specific rule was violated.
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }
}

impl FromIterator<ValidationError> for Violations {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

/// Result of a single rule check.
pub type RuleCheck = Validation<(), NonEmptyVec<ValidationError>>;

/// A summary is present when something other than whitespace remains after
/// trimming. No further character classes are rejected.
pub fn require_summary(summary: &str) -> RuleCheck {
    if summary.trim().is_empty() {
        Validation::fail(ValidationError::SummaryRequired)
    } else {
        Validation::success(())
    }
}

/// All checks a COMPLETE payload must pass.
pub fn completion_checks(summary: &str) -> Vec<RuleCheck> {
    vec![require_summary(summary)]
}

/// Run every completion check, accumulating all violations.
pub fn validate_completion(summary: &str) -> Result<(), Violations> {
    match Validation::all_vec(completion_checks(summary)) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
