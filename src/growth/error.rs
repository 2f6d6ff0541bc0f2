//! Input violations and their aggregate report.

use thiserror::Error;

use crate::period::UnrecognizedPeriod;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrowthViolation {
    /// The starting amount was zero or negative.
    #[error("Initial amount must be positive.")]
    InvalidAmount,

    /// The requested number of increments was negative.
    #[error("Number of increments cannot be negative.")]
    InvalidIncrements,

    /// The period text matched no known form.
    #[error(transparent)]
    UnrecognizedPeriod(#[from] UnrecognizedPeriod),
}

/// Everything wrong with one request, found in a single validation pass.
///
/// Violations keep field order: amount, increments, then the period text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} error(s) in input", .violations.len())]
pub struct GrowthError {
    pub violations: Vec<GrowthViolation>,
}
