//! Per-period progression of a compounding request.

use super::engine::GrowthRequest;

/// Largest increment count for which a per-period trace is produced.
///
/// Past this, callers show only the aggregate result.
pub const TRACE_LIMIT: i64 = 20;

/// Running total after one compounding period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    /// 1-based period index.
    pub period: u32,
    /// Running amount after this period.
    pub amount: f64,
}

/// Lazy sequence of per-period running totals.
///
/// Applies the per-period rate once per step. Clone the trace to restart it
/// from the first period.
#[derive(Debug, Clone)]
pub struct ProgressionTrace {
    amount: f64,
    rate: f64,
    period: u32,
    increments: u32,
}

impl ProgressionTrace {
    /// Builds the trace for a request, when one should be shown.
    ///
    /// Requests with no periods, a zero gain, or more than [`TRACE_LIMIT`]
    /// increments get no trace.
    pub fn for_request(request: &GrowthRequest) -> Option<Self> {
        if request.increments <= 0
            || request.increments > TRACE_LIMIT
            || request.gain_percent == 0.0
        {
            return None;
        }
        Some(Self {
            amount: request.initial,
            rate: request.rate(),
            period: 0,
            increments: request.increments as u32,
        })
    }
}

impl Iterator for ProgressionTrace {
    type Item = TracePoint;

    fn next(&mut self) -> Option<TracePoint> {
        if self.period >= self.increments {
            return None;
        }
        self.period += 1;
        self.amount *= 1.0 + self.rate;
        Some(TracePoint {
            period: self.period,
            amount: self.amount,
        })
    }
}
