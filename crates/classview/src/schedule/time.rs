//! Time-of-day representation and 12-hour/24-hour text conversion.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::error::FormatError;

/// Minutes in a full day; `TimeOfDay` values stay strictly below this.
pub const MINUTES_PER_DAY: u16 = 1440;

// Compiled once; input is trimmed and uppercased before matching.
static TWELVE_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})\s?(AM|PM)$").unwrap());
static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

/// Minutes since local midnight, in `[0, 1440)`.
///
/// This integer form is the canonical storage for all time arithmetic;
/// the 12-hour ("postfix") and 24-hour texts are derived views of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from minutes since midnight, rejecting values >= 1440.
    pub fn from_minutes(minutes: u16) -> Option<TimeOfDay> {
        (minutes < MINUTES_PER_DAY).then_some(TimeOfDay(minutes))
    }

    /// Creates a time from a 24-hour/minute pair.
    pub fn from_hm(hour: u16, minute: u16) -> Option<TimeOfDay> {
        (hour < 24 && minute < 60).then_some(TimeOfDay(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Parses time text in either "HH:MM" (24-hour) or "HH:MM AM/PM"
    /// (12-hour) form. Surrounding whitespace is tolerated, the meridiem is
    /// case-insensitive, and the space before it is optional.
    pub fn parse(text: &str) -> Result<TimeOfDay, FormatError> {
        let trimmed = text.trim().to_ascii_uppercase();

        if let Some(caps) = TWELVE_HOUR.captures(&trimmed) {
            let hour: u16 = caps[1].parse().expect("digits");
            let minute: u16 = caps[2].parse().expect("digits");
            if !(1..=12).contains(&hour) {
                return Err(FormatError::HourOutOfRange {
                    hour,
                    form: "12-hour",
                });
            }
            if minute > 59 {
                return Err(FormatError::MinuteOutOfRange { minute });
            }
            let hour24 = match (&caps[3], hour) {
                ("AM", 12) => 0,
                ("AM", h) => h,
                ("PM", 12) => 12,
                (_, h) => h + 12,
            };
            return Ok(TimeOfDay(hour24 * 60 + minute));
        }

        if let Some(caps) = TWENTY_FOUR_HOUR.captures(&trimmed) {
            let hour: u16 = caps[1].parse().expect("digits");
            let minute: u16 = caps[2].parse().expect("digits");
            if hour > 23 {
                return Err(FormatError::HourOutOfRange {
                    hour,
                    form: "24-hour",
                });
            }
            if minute > 59 {
                return Err(FormatError::MinuteOutOfRange { minute });
            }
            return Ok(TimeOfDay(hour * 60 + minute));
        }

        Err(FormatError::UnrecognizedFormat {
            input: text.to_string(),
        })
    }

    /// 24-hour "HH:MM" text, zero-padded.
    pub fn to_24h(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// 12-hour "HH:MM AM/PM" text, zero-padded. Midnight renders as
    /// "12:00 AM" and noon as "12:00 PM".
    pub fn to_postfix(self) -> String {
        let hour = self.hour();
        let meridiem = if hour >= 12 { "PM" } else { "AM" };
        let display = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", display, self.minute(), meridiem)
    }

    /// Formats in the requested form: postfix (12-hour) or 24-hour.
    pub fn format(self, postfix: bool) -> String {
        if postfix {
            self.to_postfix()
        } else {
            self.to_24h()
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_24h())
    }
}

/// Converts a time string between 12-hour and 24-hour textual forms.
///
/// # Arguments
/// * `text` - Time text in either form ("14:30", "2:30 PM", "02:30PM")
/// * `want_postfix` - If true the result is 12-hour with AM/PM; otherwise
///   24-hour
///
/// # Returns
/// * `Ok(String)` - The converted text, hour and minute zero-padded. Input
///   already in the requested form comes back re-padded unchanged.
/// * `Err(FormatError)` - Unparseable text or out-of-range components
pub fn convert_time(text: &str, want_postfix: bool) -> Result<String, FormatError> {
    Ok(TimeOfDay::parse(text)?.format(want_postfix))
}
