//! Flat table view: one row per course section.

use std::fmt::Write;

use super::escape;
use crate::schedule::Schedule;

const HEADERS: [&str; 10] = [
    "Course",
    "Status",
    "Units",
    "Grading",
    "Section",
    "Instruction Mode",
    "Days and Times",
    "Room",
    "Instructor",
    "Start/End Date",
];

/// Renders the schedule as a single flat table, course fields repeated on
/// every section row. Raw field text is shown untransformed.
pub fn render_table(schedule: &Schedule) -> String {
    let mut out = String::from(r#"<table class="class-schedule-table"><thead><tr>"#);
    for header in HEADERS {
        let _ = write!(out, "<th>{header}</th>");
    }
    out.push_str("</tr></thead><tbody>");

    for course in &schedule.courses {
        for section in &course.sections {
            let _ = write!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&course.course),
                escape(&course.status),
                escape(&course.units),
                escape(&course.grading),
                escape(&section.section),
                escape(&section.instruction_mode),
                escape(&section.days_and_times),
                escape(&section.room),
                escape(&section.instructor),
                escape(&section.start_end_date),
            );
        }
    }

    out.push_str("</tbody></table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Course, Section};

    fn sample() -> Schedule {
        Schedule {
            courses: vec![Course {
                course: "EECS 280 - Prog&Data Struct".to_string(),
                status: "Enrolled".to_string(),
                units: "4.00".to_string(),
                grading: "Graded".to_string(),
                sections: vec![Section {
                    class_num: "22467".to_string(),
                    instruction_mode: "In Person".to_string(),
                    section: "027".to_string(),
                    component: "LEC".to_string(),
                    days_and_times: "MoWeFr 10:00AM - 10:50AM".to_string(),
                    room: "1010 DOW".to_string(),
                    instructor: "A. Smith".to_string(),
                    start_end_date: "08/26/2024 - 12/06/2024".to_string(),
                    enrollment_span: None,
                }],
            }],
        }
    }

    #[test]
    fn one_row_per_section_with_raw_fields() {
        let html = render_table(&sample());
        assert_eq!(html.matches("<tr>").count(), 2); // header + one section
        assert!(html.contains("EECS 280 - Prog&amp;Data Struct"));
        assert!(html.contains("<td>MoWeFr 10:00AM - 10:50AM</td>"));
        assert!(html.contains("<td>08/26/2024 - 12/06/2024</td>"));
    }

    #[test]
    fn course_without_sections_contributes_no_rows() {
        let mut schedule = sample();
        schedule.courses[0].sections.clear();
        let html = render_table(&schedule);
        assert_eq!(html.matches("<tr>").count(), 1); // header only
    }
}
