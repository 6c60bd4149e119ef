//! Core schedule data model: weekdays, sections, courses, and schedules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar weekday, ordered Monday through Sunday.
///
/// The two-letter abbreviation is used only for encoding and decoding meeting
/// patterns; the full name is used for display and comparison everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in calendar column order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday through Friday, the default day selection.
    pub const WEEKDAYS: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Two-letter abbreviation used in meeting patterns (e.g. "Mo").
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Monday => "Mo",
            Weekday::Tuesday => "Tu",
            Weekday::Wednesday => "We",
            Weekday::Thursday => "Th",
            Weekday::Friday => "Fr",
            Weekday::Saturday => "Sa",
            Weekday::Sunday => "Su",
        }
    }

    /// Canonical full name (e.g. "Monday").
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Looks up a weekday from its full name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scheduled meeting instance of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Class number identifier (e.g. "22467")
    pub class_num: String,
    /// Instruction mode tag (e.g. "In Person")
    pub instruction_mode: String,
    /// Section number or label (e.g. "027")
    pub section: String,
    /// Component tag (e.g. "LEC", "DIS")
    pub component: String,
    /// Raw meeting pattern (e.g. "MoWeFr 10:00AM - 10:50AM"). May be empty
    /// for sections with no scheduled meeting time.
    pub days_and_times: String,
    pub room: String,
    pub instructor: String,
    /// Raw enrollment date range text (e.g. "08/26/2024 - 12/06/2024")
    pub start_end_date: String,
    /// Parsed enrollment dates. Stored for display only; layout math never
    /// consults them.
    pub enrollment_span: Option<(NaiveDate, NaiveDate)>,
}

/// A named course offering with its sections in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code and title (e.g. "EECS 280 - Prog&Data Struct")
    pub course: String,
    /// Enrollment status (e.g. "Enrolled")
    pub status: String,
    pub units: String,
    pub grading: String,
    pub sections: Vec<Section>,
}

/// The full set of courses for one user.
///
/// Keyed externally by user identifier; the renderers only ever receive one
/// resolved `Schedule` per call and never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub courses: Vec<Course>,
}
