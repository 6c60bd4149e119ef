//! Meeting-pattern parsing ("MoWeFr 10:00AM - 10:50AM").

use regex::Regex;
use std::sync::LazyLock;

use super::error::PatternError;
use super::time::TimeOfDay;
use super::types::Weekday;

// Top-level pattern shape: a run of letters, a start time, a dash (hyphen,
// en dash, or em dash, optionally spaced), and an end time.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([A-Za-z]+)\s+(\d{1,2}:\d{2}(?:AM|PM))\s*[-\u{2013}\u{2014}]\s*(\d{1,2}:\d{2}(?:AM|PM))$")
        .unwrap()
});

/// The decoded day set and time range of a section's meeting pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingPattern {
    /// Days in the order they were written, e.g. [Monday, Wednesday, Friday]
    pub days: Vec<Weekday>,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Parses a compact meeting-pattern string into days and a time range.
///
/// # Arguments
/// * `pattern` - e.g. "MoWeFr 10:00AM-10:50AM" or "Tu 9:00AM – 9:50AM"
///
/// # Returns
/// * `Ok(MeetingPattern)` - Decoded days and start/end minutes
/// * `Err(PatternError)` - The pattern, day run, or a time token is invalid
pub fn parse(pattern: &str) -> Result<MeetingPattern, PatternError> {
    let caps = PATTERN
        .captures(pattern.trim())
        .ok_or_else(|| PatternError::InvalidFormat {
            pattern: pattern.to_string(),
        })?;

    let days = decode_days(&caps[1])?;
    let start = TimeOfDay::parse(&caps[2])?;
    let end = TimeOfDay::parse(&caps[3])?;

    Ok(MeetingPattern { days, start, end })
}

/// Decodes a run of concatenated two-letter abbreviations ("MoWeFr").
///
/// Scans left to right, trying each known abbreviation as a prefix at the
/// current position. A position where nothing matches fails the whole parse
/// instead of being skipped, so malformed runs can never loop.
fn decode_days(run: &str) -> Result<Vec<Weekday>, PatternError> {
    let mut days = Vec::new();
    let mut position = 0;

    while position < run.len() {
        let rest = &run[position..];
        match Weekday::ALL.into_iter().find(|d| rest.starts_with(d.abbrev())) {
            Some(day) => {
                days.push(day);
                position += day.abbrev().len();
            }
            None => {
                return Err(PatternError::UnknownDayAbbreviation {
                    days: run.to_string(),
                    position,
                })
            }
        }
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::error::FormatError;

    #[test]
    fn parses_a_standard_pattern() {
        let p = parse("MoWeFr 10:00AM-10:50AM").unwrap();
        assert_eq!(
            p.days,
            vec![Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
        );
        assert_eq!(p.start.minutes(), 600);
        assert_eq!(p.end.minutes(), 650);
    }

    #[test]
    fn dash_variants_parse_identically() {
        let hyphen = parse("Tu 9:00AM-9:50AM").unwrap();
        let en_dash = parse("Tu 9:00AM – 9:50AM").unwrap();
        let em_dash = parse("Tu 9:00AM — 9:50AM").unwrap();
        assert_eq!(hyphen, en_dash);
        assert_eq!(hyphen, em_dash);
    }

    #[test]
    fn tolerates_spacing_and_case() {
        let p = parse("  TuTh 11:30am - 12:45pm ").unwrap();
        assert_eq!(p.days, vec![Weekday::Tuesday, Weekday::Thursday]);
        assert_eq!(p.start.minutes(), 690);
        assert_eq!(p.end.minutes(), 765);
    }

    #[test]
    fn unknown_abbreviation_fails_without_looping() {
        let err = parse("Xy 9:00AM-9:50AM").unwrap_err();
        assert_eq!(
            err,
            PatternError::UnknownDayAbbreviation {
                days: "Xy".to_string(),
                position: 0,
            }
        );

        // A bad abbreviation after valid ones reports where the scan stopped.
        let err = parse("MoXx 9:00AM-9:50AM").unwrap_err();
        assert_eq!(
            err,
            PatternError::UnknownDayAbbreviation {
                days: "MoXx".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn malformed_shapes_are_invalid_format() {
        for bad in [
            "",
            "MoWeFr",
            "10:00AM-10:50AM",
            "MoWeFr 10:00-10:50",
            "MoWeFr 10:00AM 10:50AM",
        ] {
            assert!(matches!(
                parse(bad),
                Err(PatternError::InvalidFormat { .. })
            ));
        }
    }

    #[test]
    fn out_of_range_time_inside_pattern_is_a_bad_time() {
        let err = parse("Mo 0:30AM-9:50AM").unwrap_err();
        assert_eq!(
            err,
            PatternError::BadTime(FormatError::HourOutOfRange {
                hour: 0,
                form: "12-hour",
            })
        );
    }
}
