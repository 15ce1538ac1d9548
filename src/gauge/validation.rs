//! Threshold validation

use thiserror::Error;

use crate::constants::{MAX_WEIGHT, MIN_WEIGHT, THRESHOLD_ERROR_MESSAGE};

/// Reason a threshold was flagged.
///
/// This is carried as data inside [`ValidationResult`]; it is never
/// propagated with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Not a whole number, or outside 0..=500
    #[error("{msg}", msg = THRESHOLD_ERROR_MESSAGE)]
    ThresholdOutOfRange,
}

/// Outcome of validating a threshold value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns true if the value passed validation
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns true if the gauge should collapse to its neutral state
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_valid()
    }

    /// Human-readable message for an invalid result
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(err) => Some(err.to_string()),
        }
    }
}

/// Validates a lower threshold.
///
/// Valid iff the value is a whole number in `0..=500`. NaN and infinities
/// fail both checks and are therefore invalid.
#[must_use]
pub fn validate_threshold(lower_threshold: f64) -> ValidationResult {
    let in_range = (MIN_WEIGHT..=MAX_WEIGHT).contains(&lower_threshold);
    let whole = lower_threshold % 1.0 == 0.0;

    if in_range && whole {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(ValidationError::ThresholdOutOfRange)
    }
}
