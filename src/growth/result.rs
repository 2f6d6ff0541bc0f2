//! Computed growth outcomes.

use serde::Serialize;

use crate::period::PeriodDescriptor;

/// Why a request produced no growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ZeroGrowthReason {
    /// Zero increments requested.
    NoIncrements,
    /// Zero gain per period.
    NoGain,
}

/// What an estimate produced.
///
/// Zero-growth cases are valid results, not errors; they carry the initial
/// amount through unchanged without touching the period text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GrowthOutcome {
    ZeroGrowth {
        reason: ZeroGrowthReason,
        final_amount: f64,
    },
    Compounded(GrowthResult),
}

/// Full compounding breakdown for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthResult {
    /// Parsed form of the request's period text.
    pub descriptor: PeriodDescriptor,

    /// increments × the period's intra-period frequency.
    pub actual_occurrences: u64,

    /// (1 + rate) raised to the actual occurrences.
    pub multiplier: f64,

    pub final_amount: f64,

    pub profit: f64,

    /// Profit as a percentage of the initial amount.
    pub profit_percent: f64,

    /// Annualized return implied by the per-period rate, computed from the
    /// period's full periods-per-year count regardless of increments.
    pub effective_annual_rate_percent: f64,
}
