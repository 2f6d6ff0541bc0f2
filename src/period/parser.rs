//! Free-text period parsing.
//!
//! Turns expressions like "monthly", "twice a day", or "3 times a week"
//! into a structured frequency descriptor. Recognition runs a fixed rule
//! order so overlapping inputs always resolve the same way.

use log::debug;
use serde::Serialize;
use thiserror::Error;

use super::tables::{self, NUMBER_WORDS};

/// A parsed period expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodDescriptor {
    /// Occurrences per stated unit ("twice a day" has frequency 2).
    pub frequency: u32,
    /// The unit as captured, noun or adverb form.
    pub base_unit: String,
    /// frequency × the unit's annual occurrence count.
    pub periods_per_year: u64,
}

/// Input that matched none of the period rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown period: {text}")]
pub struct UnrecognizedPeriod {
    /// The normalized input that failed to parse.
    pub text: String,
}

/// The five phrase shapes, in match priority order.
#[derive(Debug, Clone, Copy)]
enum PhraseShape {
    /// "<n> a <unit>"
    UnitAfterA,
    /// "<n> per <unit>"
    UnitAfterPer,
    /// "<n> time(s) a <unit>"
    UnitAfterTimesA,
    /// "<n> time(s) per <unit>"
    UnitAfterTimesPer,
    /// "<n> <unit>ly"
    AdverbUnit,
}

const PHRASE_SHAPES: &[PhraseShape] = &[
    PhraseShape::UnitAfterA,
    PhraseShape::UnitAfterPer,
    PhraseShape::UnitAfterTimesA,
    PhraseShape::UnitAfterTimesPer,
    PhraseShape::AdverbUnit,
];

impl PhraseShape {
    /// Returns the unit token when `rest` (the tokens after the count) fits
    /// this shape. Trailing tokens are allowed.
    fn capture_unit<'a>(self, rest: &[&'a str]) -> Option<&'a str> {
        match (self, rest) {
            (PhraseShape::UnitAfterA, &["a", unit, ..]) => Some(unit),
            (PhraseShape::UnitAfterPer, &["per", unit, ..]) => Some(unit),
            (PhraseShape::UnitAfterTimesA, &["time" | "times", "a", unit, ..]) => Some(unit),
            (PhraseShape::UnitAfterTimesPer, &["time" | "times", "per", unit, ..]) => Some(unit),
            (PhraseShape::AdverbUnit, &[unit, ..]) if unit.len() > 2 && unit.ends_with("ly") => {
                Some(unit)
            }
            _ => None,
        }
    }
}

/// Parses a free-text period expression.
///
/// Recognition order, first match wins:
/// 1. phrases counted by a number word ("twice a day"), words tried in
///    table order;
/// 2. phrases counted by a decimal integer ("3 times a week");
/// 3. the whole string as a canonical unit ("monthly", "month");
/// 4. the whole string plus an "ly" suffix ("annual").
pub fn parse_period(text: &str) -> Result<PeriodDescriptor, UnrecognizedPeriod> {
    let normalized = text.trim().to_lowercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    for &(word, value) in NUMBER_WORDS {
        if let Some(found) = scan_phrases(&tokens, |token| (token == word).then_some(value)) {
            debug!("period {normalized:?} matched word phrase: {found:?}");
            return Ok(found);
        }
    }

    if let Some(found) = scan_phrases(&tokens, |token| token.parse::<u32>().ok()) {
        debug!("period {normalized:?} matched numeric phrase: {found:?}");
        return Ok(found);
    }

    if let Some(count) = tables::annual_count(&normalized) {
        return Ok(descriptor(1, &normalized, count));
    }
    let adverb = format!("{normalized}ly");
    if let Some(count) = tables::annual_count(&adverb) {
        return Ok(descriptor(1, &adverb, count));
    }

    Err(UnrecognizedPeriod { text: normalized })
}

/// Finds the first phrase match for one class of count token.
///
/// Shapes are tried in priority order; within a shape only the leftmost
/// structural match is considered. A structural match whose unit is not a
/// canonical one abandons the shape, not the scan.
fn scan_phrases<F>(tokens: &[&str], count_of: F) -> Option<PeriodDescriptor>
where
    F: Fn(&str) -> Option<u32>,
{
    for &shape in PHRASE_SHAPES {
        let hit = tokens.iter().enumerate().find_map(|(i, &token)| {
            let frequency = count_of(token)?;
            let unit = shape.capture_unit(&tokens[i + 1..])?;
            Some((frequency, unit))
        });
        if let Some((frequency, unit)) = hit {
            if let Some(count) = resolve_unit(unit) {
                return Some(descriptor(frequency, unit, count));
            }
        }
    }
    None
}

/// Resolves a captured unit token to its annual occurrence count.
///
/// Adverb forms ("daily") are looked up directly. Nouns try their "ly"
/// derivation first so "week" and "weekly" share one path, with a direct
/// lookup as the fallback for the irregular "day".
fn resolve_unit(unit: &str) -> Option<u32> {
    if unit.ends_with("ly") {
        return tables::annual_count(unit);
    }
    tables::annual_count(&format!("{unit}ly")).or_else(|| tables::annual_count(unit))
}

fn descriptor(frequency: u32, unit: &str, annual_count: u32) -> PeriodDescriptor {
    PeriodDescriptor {
        frequency,
        base_unit: unit.to_string(),
        periods_per_year: u64::from(frequency) * u64::from(annual_count),
    }
}
