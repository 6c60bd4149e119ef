//! Schedule view rendering: the table, list, and calendar renderers plus the
//! dispatcher that selects among them.

mod calendar;
mod list;
mod print;
mod table;

pub use calendar::{
    layout_calendar, render_calendar, CalendarBlock, CalendarGrid, BLOCK_MARGIN_PX,
    CALENDAR_HEIGHT_PX, TIME_COLUMN_WIDTH_PX,
};
pub use list::render_list;
pub use print::render_print_document;
pub use table::render_table;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

use crate::schedule::{RenderError, Schedule, VisibleWindow, Weekday};

/// Which presentation of the schedule to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Table,
    List,
    Calendar,
}

impl ViewType {
    /// Parses a view-type string, case-insensitively.
    pub fn parse(text: &str) -> Option<ViewType> {
        match text.trim().to_ascii_lowercase().as_str() {
            "table" => Some(ViewType::Table),
            "list" => Some(ViewType::List),
            "calendar" => Some(ViewType::Calendar),
            _ => None,
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewType::Table => "table",
            ViewType::List => "list",
            ViewType::Calendar => "calendar",
        };
        f.write_str(name)
    }
}

/// Display toggles for one render call.
///
/// Constructed once per invocation by the caller; the renderers never read
/// ambient state. Each flag independently controls one optional fragment of
/// the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Render times in 12-hour AM/PM form rather than 24-hour
    pub show_time_postfix: bool,
    /// Show the full course title rather than just the course code
    pub show_class_title: bool,
    pub show_instructor: bool,
    pub show_location: bool,
    pub show_time: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_time_postfix: true,
            show_class_title: true,
            show_instructor: true,
            show_location: true,
            show_time: true,
        }
    }
}

/// Placeholder markup rendered when no schedule exists for the user.
pub const NO_SCHEDULE_PLACEHOLDER: &str =
    r#"<p class="no-schedule-message">No class schedule could be found</p>"#;

/// Renders one user's resolved schedule in the requested view.
///
/// All validation happens before any markup is produced, so a failed call
/// yields no partial output. A `None` schedule is the expected
/// user-not-found case and renders the placeholder rather than failing.
///
/// # Arguments
/// * `schedule` - The resolved schedule, or `None` when the user has none
/// * `view` - Raw view-type string: "table", "list", or "calendar"
/// * `selected_days` - Day columns for the calendar view, in column order
/// * `window` - Visible time window for the calendar view
/// * `options` - Display toggles for this call
///
/// # Returns
/// * `Ok(String)` - The rendered markup (or the not-found placeholder)
/// * `Err(RenderError)` - Unknown view type or invalid calendar input
pub fn render_schedule(
    schedule: Option<&Schedule>,
    view: &str,
    selected_days: &[Weekday],
    window: VisibleWindow,
    options: &DisplayOptions,
) -> Result<String, RenderError> {
    let Some(schedule) = schedule else {
        return Ok(NO_SCHEDULE_PLACEHOLDER.to_string());
    };

    let Some(view) = ViewType::parse(view) else {
        error!(view, "invalid view type requested");
        return Err(RenderError::UnknownViewType {
            view: view.to_string(),
        });
    };

    match view {
        ViewType::Table => Ok(table::render_table(schedule)),
        ViewType::List => Ok(list::render_list(schedule, options)),
        ViewType::Calendar => calendar::render_calendar(schedule, selected_days, window, options),
    }
}

/// Minimal HTML text escaping for interpolated schedule data.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
