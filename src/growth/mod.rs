//! Compound growth estimation: validation, the compounding math, and the
//! per-period progression trace

mod engine;
mod error;
mod result;
mod trace;

pub use engine::{estimate, GrowthRequest};
pub use error::{GrowthError, GrowthViolation};
pub use result::{GrowthOutcome, GrowthResult, ZeroGrowthReason};
pub use trace::{ProgressionTrace, TracePoint, TRACE_LIMIT};
