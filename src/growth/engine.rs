//! Compound growth estimation.

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::{GrowthError, GrowthViolation};
use super::result::{GrowthOutcome, GrowthResult, ZeroGrowthReason};
use crate::period::{parse_period, PeriodDescriptor};

/// Inputs to one growth estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthRequest {
    /// Starting amount.
    pub initial: f64,

    /// Percent gain per period (5 means 5%). May be negative.
    pub gain_percent: f64,

    /// Free-text period expression ("monthly", "twice a day", ...).
    pub period: String,

    /// Number of periods to compound over.
    pub increments: i64,
}

impl GrowthRequest {
    /// Per-period growth rate as a fraction.
    pub fn rate(&self) -> f64 {
        self.gain_percent / 100.0
    }
}

/// Estimates compound growth for a request.
///
/// Zero increments or a zero gain short-circuit to a no-growth outcome
/// before any validation runs, so such requests never fail. Everything else
/// is validated in one pass; all violations are reported together. A clean
/// request yields the full breakdown.
pub fn estimate(request: &GrowthRequest) -> Result<GrowthOutcome, GrowthError> {
    if request.increments == 0 {
        return Ok(GrowthOutcome::ZeroGrowth {
            reason: ZeroGrowthReason::NoIncrements,
            final_amount: request.initial,
        });
    }
    if request.gain_percent == 0.0 {
        return Ok(GrowthOutcome::ZeroGrowth {
            reason: ZeroGrowthReason::NoGain,
            final_amount: request.initial,
        });
    }

    let mut violations = Vec::new();
    if request.initial <= 0.0 {
        violations.push(GrowthViolation::InvalidAmount);
    }
    if request.increments < 0 {
        violations.push(GrowthViolation::InvalidIncrements);
    }
    let descriptor = match parse_period(&request.period) {
        Ok(descriptor) => Some(descriptor),
        Err(err) => {
            violations.push(GrowthViolation::from(err));
            None
        }
    };

    match descriptor {
        Some(descriptor) if violations.is_empty() => {
            Ok(GrowthOutcome::Compounded(compound(request, descriptor)))
        }
        _ => Err(GrowthError { violations }),
    }
}

/// Runs the compounding math for a validated request.
fn compound(request: &GrowthRequest, descriptor: PeriodDescriptor) -> GrowthResult {
    let rate = request.rate();
    let actual_occurrences = request.increments as u64 * u64::from(descriptor.frequency);
    let multiplier = (1.0 + rate).powf(actual_occurrences as f64);
    let final_amount = request.initial * multiplier;
    let profit = final_amount - request.initial;
    let profit_percent = if request.initial != 0.0 {
        profit / request.initial * 100.0
    } else {
        0.0
    };
    let effective_annual_rate_percent =
        ((1.0 + rate).powf(descriptor.periods_per_year as f64) - 1.0) * 100.0;

    debug!(
        "compounded {} occurrences of {:?} at rate {rate}: multiplier {multiplier}",
        actual_occurrences, descriptor.base_unit
    );

    GrowthResult {
        descriptor,
        actual_occurrences,
        multiplier,
        final_amount,
        profit,
        profit_percent,
        effective_annual_rate_percent,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn request(initial: f64, gain: f64, period: &str, increments: i64) -> GrowthRequest {
        GrowthRequest {
            initial,
            gain_percent: gain,
            period: period.to_string(),
            increments,
        }
    }

    fn compounded(req: &GrowthRequest) -> GrowthResult {
        match estimate(req).unwrap() {
            GrowthOutcome::Compounded(result) => result,
            other => panic!("expected a compounded outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_monthly_compounding() {
        let result = compounded(&request(1000.0, 5.0, "monthly", 12));

        // (1.05)^12 = 1.7958563...
        assert_eq!(result.actual_occurrences, 12);
        assert_relative_eq!(result.multiplier, 1.795856, max_relative = 1e-5);
        assert_relative_eq!(result.final_amount, 1795.86, max_relative = 1e-5);
        assert_relative_eq!(result.profit, 795.86, max_relative = 1e-5);
        assert_relative_eq!(result.profit_percent, 79.586, max_relative = 1e-4);
    }

    #[test]
    fn test_frequency_scales_occurrences() {
        let result = compounded(&request(100.0, 1.0, "twice a day", 4));

        // 4 increments of "twice a day" compound 8 times: (1.01)^8 = 1.082856...
        assert_eq!(result.descriptor.frequency, 2);
        assert_eq!(result.actual_occurrences, 8);
        assert_relative_eq!(result.multiplier, 1.082857, max_relative = 1e-5);
        assert_relative_eq!(result.final_amount, 108.29, max_relative = 1e-4);
    }

    #[test]
    fn test_effective_annual_rate_from_periods_per_year() {
        // (1.05)^12 - 1 = 79.586%, no matter how many increments run.
        let short = compounded(&request(1000.0, 5.0, "monthly", 3));
        let long = compounded(&request(1000.0, 5.0, "monthly", 60));

        assert_relative_eq!(
            short.effective_annual_rate_percent,
            79.5856,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            short.effective_annual_rate_percent,
            long.effective_annual_rate_percent,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_effective_annual_rate_embeds_frequency() {
        // "twice a day" annualizes over 730 occurrences, not 365.
        let result = compounded(&request(100.0, 0.01, "twice a day", 4));
        let expected = ((1.0 + 0.0001_f64).powf(730.0) - 1.0) * 100.0;
        assert_relative_eq!(
            result.effective_annual_rate_percent,
            expected,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_zero_increments_short_circuits() {
        // Nothing else is validated, not even the period text.
        let outcome = estimate(&request(-5.0, 5.0, "bogus", 0)).unwrap();
        assert_eq!(
            outcome,
            GrowthOutcome::ZeroGrowth {
                reason: ZeroGrowthReason::NoIncrements,
                final_amount: -5.0,
            }
        );
    }

    #[test]
    fn test_zero_gain_short_circuits() {
        // A zero gain wins over a negative increment count.
        let outcome = estimate(&request(1000.0, 0.0, "bogus", -3)).unwrap();
        assert_eq!(
            outcome,
            GrowthOutcome::ZeroGrowth {
                reason: ZeroGrowthReason::NoGain,
                final_amount: 1000.0,
            }
        );
    }

    #[test]
    fn test_zero_increments_outrank_zero_gain() {
        let outcome = estimate(&request(1000.0, 0.0, "monthly", 0)).unwrap();
        assert!(matches!(
            outcome,
            GrowthOutcome::ZeroGrowth {
                reason: ZeroGrowthReason::NoIncrements,
                ..
            }
        ));
    }

    #[test]
    fn test_violations_collected_in_order() {
        let error = estimate(&request(-5.0, 5.0, "bogus", -3)).unwrap_err();

        assert_eq!(error.violations.len(), 3);
        assert_eq!(error.violations[0], GrowthViolation::InvalidAmount);
        assert_eq!(error.violations[1], GrowthViolation::InvalidIncrements);
        assert_eq!(
            error.violations[2].to_string(),
            "Unknown period: bogus"
        );
    }

    #[test]
    fn test_single_violation() {
        let error = estimate(&request(1000.0, 5.0, "monthly", -1)).unwrap_err();
        assert_eq!(error.violations, vec![GrowthViolation::InvalidIncrements]);

        let error = estimate(&request(0.0, 5.0, "monthly", 12)).unwrap_err();
        assert_eq!(error.violations, vec![GrowthViolation::InvalidAmount]);
    }

    #[test]
    fn test_more_increments_grow_more() {
        let mut previous = 0.0;
        for increments in [1, 2, 6, 12, 24, 120] {
            let result = compounded(&request(1000.0, 5.0, "monthly", increments));
            assert!(
                result.final_amount > previous,
                "{increments} increments should beat {previous}"
            );
            previous = result.final_amount;
        }
    }

    #[test]
    fn test_negative_gain_shrinks() {
        let result = compounded(&request(1000.0, -5.0, "monthly", 12));

        // (0.95)^12 = 0.54036...
        assert_relative_eq!(result.multiplier, 0.540360, max_relative = 1e-5);
        assert!(result.final_amount < 1000.0);
        assert!(result.profit < 0.0);
        assert!(result.effective_annual_rate_percent < 0.0);
    }

    #[test]
    fn test_noun_and_adverb_periods_agree() {
        let noun = compounded(&request(1000.0, 5.0, "month", 12));
        let adverb = compounded(&request(1000.0, 5.0, "monthly", 12));

        assert_eq!(noun.descriptor.periods_per_year, 12);
        assert_relative_eq!(noun.final_amount, adverb.final_amount, max_relative = 1e-12);
        assert_relative_eq!(
            noun.effective_annual_rate_percent,
            adverb.effective_annual_rate_percent,
            max_relative = 1e-12
        );
    }
}
