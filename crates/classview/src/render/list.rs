//! Grouped list view: one block per course with a details table and a
//! sections table.

use std::fmt::Write;
use tracing::warn;

use super::{escape, DisplayOptions};
use crate::schedule::{parse_meeting_pattern, Course, Schedule, Section};

/// Renders the schedule grouped by course. Each course gets a title header,
/// a one-row course-details table, and a sections table whose columns follow
/// the location/instructor/time toggles.
pub fn render_list(schedule: &Schedule, options: &DisplayOptions) -> String {
    let mut out = String::new();

    for course in &schedule.courses {
        out.push_str(r#"<div class="course-container">"#);

        let label = if options.show_class_title {
            course.course.as_str()
        } else {
            // Just the course code before the title separator.
            course.course.split('-').next().unwrap_or(&course.course)
        };
        let _ = write!(
            out,
            r#"<h2 class="course-title">{}</h2>"#,
            escape(label.trim())
        );

        out.push_str(&course_details_table(course));
        out.push_str(&sections_table(&course.sections, options));
        out.push_str("</div>");
    }

    out
}

fn course_details_table(course: &Course) -> String {
    format!(
        r#"<table class="course-details-table"><tr><td><strong>Status</strong></td><td>{}</td><td><strong>Units</strong></td><td>{}</td><td><strong>Grading</strong></td><td>{}</td></tr></table>"#,
        escape(&course.status),
        escape(&course.units),
        escape(&course.grading),
    )
}

fn sections_table(sections: &[Section], options: &DisplayOptions) -> String {
    let mut out = String::from(r#"<table class="sections-table"><thead><tr>"#);
    out.push_str("<th>Class Nbr</th><th>Instruction Mode</th><th>Section</th><th>Component</th>");
    out.push_str(if options.show_time {
        "<th>Days &amp; Times</th>"
    } else {
        "<th>Days</th>"
    });
    if options.show_location {
        out.push_str("<th>Room</th>");
    }
    if options.show_instructor {
        out.push_str("<th>Instructor</th>");
    }
    out.push_str("<th>Start / End Date</th></tr></thead><tbody>");

    for section in sections {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            escape(&section.class_num),
            escape(&section.instruction_mode),
            escape(&section.section),
            escape(&section.component),
            days_and_times_cell(section, options),
        );
        if options.show_location {
            let _ = write!(out, "<td>{}</td>", escape(&section.room));
        }
        if options.show_instructor {
            let _ = write!(out, "<td>{}</td>", escape(&section.instructor));
        }
        let _ = write!(out, "<td>{}</td></tr>", escape(&section.start_end_date));
    }

    out.push_str("</tbody></table>");
    out
}

/// Formats the days/time cell for one section: the abbreviated day run, plus
/// the time range in the configured clock form when the time toggle is on.
/// An unparseable pattern falls back to the raw text.
fn days_and_times_cell(section: &Section, options: &DisplayOptions) -> String {
    let raw = section.days_and_times.trim();
    if raw.is_empty() {
        return String::new();
    }

    match parse_meeting_pattern(raw) {
        Ok(pattern) => {
            let days: String = pattern.days.iter().map(|d| d.abbrev()).collect();
            if options.show_time {
                format!(
                    "{} {}-{}",
                    days,
                    pattern.start.format(options.show_time_postfix),
                    pattern.end.format(options.show_time_postfix),
                )
            } else {
                days
            }
        }
        Err(e) => {
            warn!(
                class_num = %section.class_num,
                pattern = raw,
                error = %e,
                "unparseable meeting pattern in list view, showing raw text"
            );
            escape(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Course;

    fn section(days_and_times: &str) -> Section {
        Section {
            class_num: "10001".to_string(),
            instruction_mode: "In Person".to_string(),
            section: "001".to_string(),
            component: "LEC".to_string(),
            days_and_times: days_and_times.to_string(),
            room: "1010 DOW".to_string(),
            instructor: "A. Smith".to_string(),
            start_end_date: "08/26/2024 - 12/06/2024".to_string(),
            enrollment_span: None,
        }
    }

    fn schedule(days_and_times: &str) -> Schedule {
        Schedule {
            courses: vec![Course {
                course: "EECS 280 - Prog&Data Struct".to_string(),
                status: "Enrolled".to_string(),
                units: "4.00".to_string(),
                grading: "Graded".to_string(),
                sections: vec![section(days_and_times)],
            }],
        }
    }

    #[test]
    fn formats_times_in_the_configured_clock_form() {
        let postfix = render_list(&schedule("MoWeFr 10:00AM - 10:50AM"), &DisplayOptions::default());
        assert!(postfix.contains("MoWeFr 10:00 AM-10:50 AM"));

        let military = render_list(
            &schedule("MoWeFr 1:00PM - 2:20PM"),
            &DisplayOptions {
                show_time_postfix: false,
                ..DisplayOptions::default()
            },
        );
        assert!(military.contains("MoWeFr 13:00-14:20"));
    }

    #[test]
    fn time_toggle_off_leaves_days_only() {
        let html = render_list(
            &schedule("TuTh 11:30AM - 12:45PM"),
            &DisplayOptions {
                show_time: false,
                ..DisplayOptions::default()
            },
        );
        assert!(html.contains("<th>Days</th>"));
        assert!(html.contains("<td>TuTh</td>"));
        assert!(!html.contains("11:30"));
    }

    #[test]
    fn class_title_toggle_shortens_the_header() {
        let full = render_list(&schedule("Mo 9:00AM-9:50AM"), &DisplayOptions::default());
        assert!(full.contains("EECS 280 - Prog&amp;Data Struct</h2>"));

        let short = render_list(
            &schedule("Mo 9:00AM-9:50AM"),
            &DisplayOptions {
                show_class_title: false,
                ..DisplayOptions::default()
            },
        );
        assert!(short.contains(">EECS 280</h2>"));
    }

    #[test]
    fn column_toggles_drop_room_and_instructor() {
        let html = render_list(
            &schedule("Mo 9:00AM-9:50AM"),
            &DisplayOptions {
                show_location: false,
                show_instructor: false,
                ..DisplayOptions::default()
            },
        );
        assert!(!html.contains("1010 DOW"));
        assert!(!html.contains("A. Smith"));
        assert!(html.contains("<th>Start / End Date</th>"));
    }

    #[test]
    fn malformed_pattern_falls_back_to_raw_text() {
        let html = render_list(&schedule("Xx 9:00AM-9:50AM"), &DisplayOptions::default());
        assert!(html.contains("Xx 9:00AM-9:50AM"));
    }

    #[test]
    fn course_without_sections_keeps_header_and_empty_body() {
        let mut sched = schedule("Mo 9:00AM-9:50AM");
        sched.courses[0].sections.clear();
        let html = render_list(&sched, &DisplayOptions::default());
        assert!(html.contains(r#"<h2 class="course-title">"#));
        assert!(html.contains("<tbody></tbody>"));
    }
}
