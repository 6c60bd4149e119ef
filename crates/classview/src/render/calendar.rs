//! Weekly time-grid calendar view.
//!
//! Lays half-hour rows against the selected day columns and places one block
//! per section meeting at its computed row offset and span. Layout is
//! computed separately from markup so the geometry is testable on its own.

use std::collections::HashMap;
use std::fmt::Write;
use tracing::{debug, error, warn};

use super::{escape, DisplayOptions};
use crate::schedule::{
    parse_meeting_pattern, RenderError, Schedule, TimeOfDay, VisibleWindow, Weekday, SLOT_INTERVAL,
};

/// Fixed total calendar height, distributed evenly across the rows.
pub const CALENDAR_HEIGHT_PX: f32 = 700.0;

/// Fixed width of the time-label column.
pub const TIME_COLUMN_WIDTH_PX: u32 = 100;

/// Vertical margin subtracted from every block's height.
pub const BLOCK_MARGIN_PX: f32 = 4.0;

/// One placed section block.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarBlock {
    /// Column index into the selected-day sequence
    pub day_index: usize,
    /// Row index of the half-hour slot the block starts in
    pub row_index: usize,
    /// Offset into the first row as a fraction of the row height, from a
    /// start time that falls inside a slot (e.g. 0.5 for a :15 start)
    pub top_offset: f32,
    /// Rendered height: row span scaled by row height, minus the margin
    pub height_px: f32,
    pub label: String,
}

/// The computed grid: half-hour rows by selected-day columns, plus blocks.
#[derive(Debug, Clone)]
pub struct CalendarGrid {
    pub days: Vec<Weekday>,
    pub rows: Vec<TimeOfDay>,
    pub row_height_px: f32,
    pub blocks: Vec<CalendarBlock>,
}

/// Computes the calendar grid for a schedule.
///
/// Sections with malformed meeting patterns are skipped with a diagnostic;
/// sections entirely outside the visible window or the selected days are
/// omitted. A single bad section never aborts the whole layout.
///
/// # Arguments
/// * `schedule` - The resolved schedule to place
/// * `selected_days` - Day columns, in column order; must be non-empty
/// * `window` - Visible time bounds, aligned to the half-hour grid
/// * `options` - Display toggles controlling block label fragments
pub fn layout_calendar(
    schedule: &Schedule,
    selected_days: &[Weekday],
    window: VisibleWindow,
    options: &DisplayOptions,
) -> Result<CalendarGrid, RenderError> {
    if selected_days.is_empty() {
        error!("no valid selected days provided");
        return Err(RenderError::NoDaysSelected);
    }

    let rows = generate_rows(window)?;
    let row_height_px = CALENDAR_HEIGHT_PX / rows.len() as f32;
    let mut blocks = Vec::new();

    for course in &schedule.courses {
        for section in &course.sections {
            let raw = section.days_and_times.trim();
            if raw.is_empty() {
                continue;
            }

            let pattern = match parse_meeting_pattern(raw) {
                Ok(pattern) => pattern,
                Err(e) => {
                    warn!(
                        course = %course.course,
                        class_num = %section.class_num,
                        pattern = raw,
                        error = %e,
                        "skipping section with malformed meeting pattern"
                    );
                    continue;
                }
            };

            let start = pattern.start.minutes();
            let end = pattern.end.minutes();
            let window_start = window.start.minutes();

            if start < window_start {
                debug!(course = %course.course, pattern = raw, %window,
                       "section starts before the visible window, omitted");
                continue;
            }
            let row_index = ((start - window_start) / SLOT_INTERVAL) as usize;
            if row_index >= rows.len() {
                debug!(course = %course.course, pattern = raw, %window,
                       "section starts after the visible window, omitted");
                continue;
            }

            let span = f32::from(end.saturating_sub(start)) / f32::from(SLOT_INTERVAL);
            let top_offset = f32::from(start % SLOT_INTERVAL) / f32::from(SLOT_INTERVAL);
            let height_px = span * row_height_px - BLOCK_MARGIN_PX;
            let label = block_label(&course.course, section, &pattern, options);

            for day in &pattern.days {
                let Some(day_index) = selected_days.iter().position(|d| d == day) else {
                    continue;
                };
                blocks.push(CalendarBlock {
                    day_index,
                    row_index,
                    top_offset,
                    height_px,
                    label: label.clone(),
                });
            }
        }
    }

    Ok(CalendarGrid {
        days: selected_days.to_vec(),
        rows,
        row_height_px,
        blocks,
    })
}

/// Renders the calendar view to markup.
pub fn render_calendar(
    schedule: &Schedule,
    selected_days: &[Weekday],
    window: VisibleWindow,
    options: &DisplayOptions,
) -> Result<String, RenderError> {
    Ok(layout_calendar(schedule, selected_days, window, options)?.to_html())
}

/// Generates the half-hour row sequence from the window start (inclusive) to
/// its end (exclusive).
fn generate_rows(window: VisibleWindow) -> Result<Vec<TimeOfDay>, RenderError> {
    let start = window.start.minutes();
    let end = window.end.minutes();
    if start >= end || (end - start) % SLOT_INTERVAL != 0 {
        error!(%window, "visible window is not aligned to the half-hour grid");
        return Err(RenderError::MisalignedWindow {
            start: window.start.to_24h(),
            end: window.end.to_24h(),
        });
    }

    Ok((start..end)
        .step_by(SLOT_INTERVAL as usize)
        .map(|m| TimeOfDay::from_minutes(m).expect("row minutes below 1440"))
        .collect())
}

/// Composes a block's label from the deterministic toggle order: course and
/// component always (course code dropped when the title toggle is off), then
/// instructor, room, and the time range.
fn block_label(
    course: &str,
    section: &crate::schedule::Section,
    pattern: &crate::schedule::MeetingPattern,
    options: &DisplayOptions,
) -> String {
    let mut label = if options.show_class_title {
        format!("{} ({})", course, section.component)
    } else {
        format!("({})", section.component)
    };
    if options.show_instructor {
        let _ = write!(label, " {}", section.instructor);
    }
    if options.show_location {
        let _ = write!(label, " {}", section.room);
    }
    if options.show_time {
        let _ = write!(
            label,
            " {} - {}",
            pattern.start.format(options.show_time_postfix),
            pattern.end.format(options.show_time_postfix),
        );
    }
    label
}

/// Hour-row time label in the original "8:00 AM" style, no zero padding.
fn hour_label(time: TimeOfDay) -> String {
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display}:00 {meridiem}")
}

impl CalendarGrid {
    /// Emits the grid as a fixed-layout table. Time labels appear only on
    /// full-hour rows; blocks are absolutely positioned inside their cells,
    /// and blocks sharing a cell stack as siblings.
    pub fn to_html(&self) -> String {
        let mut cell_blocks: HashMap<(usize, usize), Vec<&CalendarBlock>> = HashMap::new();
        for block in &self.blocks {
            cell_blocks
                .entry((block.row_index, block.day_index))
                .or_default()
                .push(block);
        }

        let mut out = format!(
            r#"<table class="calendar-table" style="width:100%;height:{CALENDAR_HEIGHT_PX}px;table-layout:fixed;">"#
        );

        let _ = write!(
            out,
            r#"<tr><th class="time-column" style="width:{TIME_COLUMN_WIDTH_PX}px;">Time</th>"#
        );
        for day in &self.days {
            let _ = write!(
                out,
                r#"<th style="width:calc((100% - {TIME_COLUMN_WIDTH_PX}px) / {});">{day}</th>"#,
                self.days.len(),
            );
        }
        out.push_str("</tr>");

        for (row_index, row_time) in self.rows.iter().enumerate() {
            out.push_str("<tr>");
            if row_time.minute() == 0 {
                let _ = write!(
                    out,
                    r#"<td class="time-label hour" style="height:{:.2}px;">{}</td>"#,
                    self.row_height_px,
                    hour_label(*row_time),
                );
            } else {
                let _ = write!(
                    out,
                    r#"<td class="time-label" style="height:{:.2}px;"></td>"#,
                    self.row_height_px,
                );
            }

            for day_index in 0..self.days.len() {
                out.push_str(r#"<td class="slot-cell" style="position:relative;padding:0;">"#);
                if let Some(blocks) = cell_blocks.get(&(row_index, day_index)) {
                    for block in blocks {
                        let top_px = block.top_offset * self.row_height_px;
                        let _ = write!(
                            out,
                            r#"<div class="class-block" style="top:{:.2}px;height:{:.2}px;">{}</div>"#,
                            top_px,
                            block.height_px,
                            escape(&block.label),
                        );
                    }
                }
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }

        out.push_str("</table>");
        out
    }
}
