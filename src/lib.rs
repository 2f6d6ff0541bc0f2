//! Money Tools - command-line estimators for compound growth and currency conversion
//!
//! This library provides:
//! - Free-text period parsing ("monthly", "twice a day", "3 times a week")
//! - Compound growth estimation with aggregated input validation
//! - A lazy per-period progression trace for small projections
//! - Live exchange-rate lookup and conversion
//! - Console number formatting shared by the binaries

pub mod growth;
pub mod period;
pub mod rates;
pub mod render;

// Re-export commonly used types
pub use growth::{
    estimate, GrowthError, GrowthOutcome, GrowthRequest, GrowthResult, ProgressionTrace,
};
pub use period::{parse_period, PeriodDescriptor, UnrecognizedPeriod};
pub use rates::{convert, fetch_rate, RateError, RateQuote};
