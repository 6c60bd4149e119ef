//! Schedule ingestion: raw JSON shapes and the file/URL loaders.
//!
//! Producers of the schedule feed disagree on field naming (snake_case and
//! camelCase variants of the same fields exist). The aliases here normalize
//! both at the boundary so the rest of the crate only ever sees the one
//! typed [`Section`]/[`Course`] shape.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

use crate::schedule::{Course, Schedule, Section};

type BoxError = Box<dyn Error + Send + Sync>;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// A JSON field that some producers emit as a number and others as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl Default for NumberOrText {
    fn default() -> Self {
        NumberOrText::Text(String::new())
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integral class numbers print without a trailing ".0".
            NumberOrText::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            NumberOrText::Number(n) => write!(f, "{n}"),
            NumberOrText::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawSection {
    #[serde(alias = "classNum", default)]
    pub class_nbr: NumberOrText,
    #[serde(alias = "instructionMode", default)]
    pub instruction_mode: String,
    #[serde(alias = "sectionNum", default)]
    pub section: String,
    #[serde(default)]
    pub component: String,
    #[serde(alias = "daysAndTimes", default)]
    pub days_and_times: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(alias = "startEndDate", default)]
    pub start_end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct RawCourse {
    pub course: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub units: NumberOrText,
    #[serde(default)]
    pub grading: String,
    #[serde(default)]
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub struct RawSchedule {
    pub courses: Vec<RawCourse>,
}

impl RawSection {
    fn normalize(self) -> Section {
        let enrollment_span = parse_date_span(&self.start_end_date);
        Section {
            class_num: self.class_nbr.to_string(),
            instruction_mode: self.instruction_mode,
            section: self.section,
            component: self.component,
            days_and_times: self.days_and_times,
            room: self.room,
            instructor: self.instructor,
            start_end_date: self.start_end_date,
            enrollment_span,
        }
    }
}

impl RawCourse {
    fn normalize(self) -> Course {
        Course {
            course: self.course,
            status: self.status,
            units: self.units.to_string(),
            grading: self.grading,
            sections: self.sections.into_iter().map(RawSection::normalize).collect(),
        }
    }
}

impl RawSchedule {
    fn normalize(self) -> Schedule {
        Schedule {
            courses: self.courses.into_iter().map(RawCourse::normalize).collect(),
        }
    }
}

/// Parses "MM/DD/YYYY - MM/DD/YYYY" into a date pair. The dates are kept for
/// display only, so a failed parse is quietly tolerated.
fn parse_date_span(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = text.split_once('-')?;
    let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).ok()?;
    Some((start, end))
}

/// Parses a user-to-schedule JSON document.
///
/// A malformed entry for one user is skipped with a diagnostic; the rest of
/// the map still loads.
pub fn parse_schedules(json: &str) -> Result<BTreeMap<String, Schedule>, BoxError> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut schedules = BTreeMap::new();
    for (user, value) in raw {
        match serde_json::from_value::<RawSchedule>(value) {
            Ok(schedule) => {
                schedules.insert(user, schedule.normalize());
            }
            Err(e) => {
                warn!(user = %user, error = %e, "skipping malformed schedule entry");
            }
        }
    }

    info!("loaded schedules for {} user(s)", schedules.len());
    Ok(schedules)
}

/// Loads the schedule map from a JSON file on disk.
pub fn load_from_path(path: &Path) -> Result<BTreeMap<String, Schedule>, BoxError> {
    debug!(path = %path.display(), "reading schedule file");
    let content = fs::read_to_string(path)?;
    parse_schedules(&content)
}

/// Fetches and parses the schedule map from a remote URL.
pub async fn load_from_url(source: &str) -> Result<BTreeMap<String, Schedule>, BoxError> {
    let url = Url::parse(source)?;
    info!(%url, "fetching schedule data");
    let body = reqwest::get(url).await?.error_for_status()?.text().await?;
    parse_schedules(&body)
}

/// True when the configured schedule source looks like an HTTP(S) URL rather
/// than a filesystem path.
pub fn is_remote_source(source: &str) -> bool {
    matches!(Url::parse(source), Ok(u) if u.scheme() == "http" || u.scheme() == "https")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_and_camel_case_normalize_identically() {
        let snake = r#"{
            "kgruiz": {"courses": [{
                "course": "EECS 280 - Prog&Data Struct",
                "status": "Enrolled",
                "units": "4.00",
                "grading": "Graded",
                "sections": [{
                    "class_nbr": 22467,
                    "instruction_mode": "In Person",
                    "section": "027",
                    "component": "LEC",
                    "days_and_times": "MoWeFr 10:00AM - 10:50AM",
                    "room": "1010 DOW",
                    "instructor": "A. Smith",
                    "start_end_date": "08/26/2024 - 12/06/2024"
                }]
            }]}
        }"#;
        let camel = r#"{
            "kgruiz": {"courses": [{
                "course": "EECS 280 - Prog&Data Struct",
                "status": "Enrolled",
                "units": 4.0,
                "grading": "Graded",
                "sections": [{
                    "classNum": "22467",
                    "instructionMode": "In Person",
                    "sectionNum": "027",
                    "component": "LEC",
                    "daysAndTimes": "MoWeFr 10:00AM - 10:50AM",
                    "room": "1010 DOW",
                    "instructor": "A. Smith",
                    "startEndDate": "08/26/2024 - 12/06/2024"
                }]
            }]}
        }"#;

        let a = parse_schedules(snake).unwrap();
        let b = parse_schedules(camel).unwrap();
        let section_a = &a["kgruiz"].courses[0].sections[0];
        let section_b = &b["kgruiz"].courses[0].sections[0];

        assert_eq!(section_a.class_num, "22467");
        assert_eq!(section_a.class_num, section_b.class_num);
        assert_eq!(section_a.section, section_b.section);
        assert_eq!(section_a.days_and_times, section_b.days_and_times);
        assert_eq!(a["kgruiz"].courses[0].units, "4.00");
        assert_eq!(b["kgruiz"].courses[0].units, "4");
    }

    #[test]
    fn enrollment_dates_parse_when_well_formed() {
        let json = r#"{"u": {"courses": [{"course": "MATH 217", "sections": [
            {"class_nbr": "1", "days_and_times": "", "start_end_date": "08/26/2024 - 12/06/2024"},
            {"class_nbr": "2", "days_and_times": "", "start_end_date": "TBA"}
        ]}]}}"#;

        let schedules = parse_schedules(json).unwrap();
        let sections = &schedules["u"].courses[0].sections;
        let (start, end) = sections[0].enrollment_span.unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 8, 26).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 12, 6).unwrap());
        assert!(sections[1].enrollment_span.is_none());
        assert_eq!(sections[1].start_end_date, "TBA");
    }

    #[test]
    fn malformed_user_entries_are_skipped_not_fatal() {
        let json = r#"{
            "good": {"courses": []},
            "bad": {"courses": "nope"}
        }"#;
        let schedules = parse_schedules(json).unwrap();
        assert!(schedules.contains_key("good"));
        assert!(!schedules.contains_key("bad"));
    }

    #[test]
    fn non_object_document_is_an_error() {
        assert!(parse_schedules("[1, 2, 3]").is_err());
    }

    #[test]
    fn remote_source_detection() {
        assert!(is_remote_source("https://example.edu/classSchedules.json"));
        assert!(is_remote_source("http://localhost:8000/data.json"));
        assert!(!is_remote_source("data/class_schedules.json"));
        assert!(!is_remote_source("/var/lib/classview/schedules.json"));
    }
}
