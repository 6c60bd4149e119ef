/// Schedule domain subsystem: the data model, time parsing and conversion,
/// the meeting-pattern grammar, and the visible-window range selector.
mod error;
mod pattern;
mod repeat;
mod time;
mod types;
mod window;

pub use error::{FormatError, PatternError, RenderError};
pub use pattern::{parse as parse_meeting_pattern, MeetingPattern};
pub use repeat::{RepeatHandle, INITIAL_DELAY, REPEAT_INTERVAL};
pub use time::{convert_time, TimeOfDay, MINUTES_PER_DAY};
pub use types::{Course, Schedule, Section, Weekday};
pub use window::{
    Cursor, RangeSelector, StepDirection, TimeSlots, VisibleWindow, SLOT_COUNT, SLOT_INTERVAL,
};
