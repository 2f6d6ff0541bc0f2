//! Canonical period and number-word tables.

/// Annual occurrence counts keyed by unit name, noun and adverb forms alike.
///
/// Counts use fixed non-leap approximations: 365-day year, 52-week year,
/// 12-month year, 8760-hour year.
pub(super) const PERIODS_PER_YEAR: &[(&str, u32)] = &[
    ("yearly", 1),
    ("annually", 1),
    ("year", 1),
    ("monthly", 12),
    ("month", 12),
    ("weekly", 52),
    ("week", 52),
    ("daily", 365),
    ("day", 365),
    ("hourly", 8760),
    ("hour", 8760),
];

/// Number words accepted in frequency phrases, in scan order.
///
/// Declaration order is load-bearing: the parser tries each word in turn,
/// so "twice" outranks "two" when both could match a phrase.
pub(super) const NUMBER_WORDS: &[(&str, u32)] = &[
    ("once", 1),
    ("one", 1),
    ("twice", 2),
    ("two", 2),
    ("three", 3),
    ("thrice", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
];

/// Looks up a unit's occurrences per year.
pub(super) fn annual_count(unit: &str) -> Option<u32> {
    PERIODS_PER_YEAR
        .iter()
        .find(|&&(name, _)| name == unit)
        .map(|&(_, count)| count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_annual_counts() {
        assert_eq!(annual_count("yearly"), Some(1));
        assert_eq!(annual_count("annually"), Some(1));
        assert_eq!(annual_count("monthly"), Some(12));
        assert_eq!(annual_count("weekly"), Some(52));
        assert_eq!(annual_count("daily"), Some(365));
        assert_eq!(annual_count("hourly"), Some(8760));
    }

    #[test]
    fn test_noun_and_adverb_forms_agree() {
        for (noun, adverb) in [
            ("year", "yearly"),
            ("month", "monthly"),
            ("week", "weekly"),
            ("day", "daily"),
            ("hour", "hourly"),
        ] {
            assert_eq!(annual_count(noun), annual_count(adverb), "{noun} vs {adverb}");
        }
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(annual_count("fortnightly"), None);
        assert_eq!(annual_count(""), None);
    }

    #[test]
    fn test_number_word_scan_order() {
        let words: Vec<&str> = NUMBER_WORDS.iter().map(|&(word, _)| word).collect();
        let twice = words.iter().position(|&w| w == "twice");
        let two = words.iter().position(|&w| w == "two");
        assert!(twice < two);
        assert_eq!(words[0], "once");
        assert_eq!(*words.last().unwrap(), "twelve");
    }

    #[test]
    fn test_number_word_values() {
        assert_eq!(
            NUMBER_WORDS.iter().find(|&&(w, _)| w == "thrice"),
            Some(&("thrice", 3))
        );
        assert_eq!(
            NUMBER_WORDS.iter().find(|&&(w, _)| w == "twelve"),
            Some(&("twelve", 12))
        );
    }
}
