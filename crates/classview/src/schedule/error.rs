//! Error types for schedule parsing and rendering.

use thiserror::Error;

/// Errors from converting time text between 12-hour and 24-hour forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Input matched neither "HH:MM" nor "HH:MM AM/PM"
    #[error("invalid time format, expected \"HH:MM\" or \"HH:MM AM/PM\": {input:?}")]
    UnrecognizedFormat { input: String },

    /// Hour outside 0-23 (24-hour input) or 1-12 (12-hour input)
    #[error("hour {hour} out of range for {form} time")]
    HourOutOfRange { hour: u16, form: &'static str },

    /// Minute outside 0-59
    #[error("minute {minute} out of range")]
    MinuteOutOfRange { minute: u16 },
}

/// Errors from parsing a meeting pattern such as "MoWeFr 10:00AM - 10:50AM".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern does not match `<days> <start> - <end>` at all
    #[error("meeting pattern does not match \"<days> <start>-<end>\": {pattern:?}")]
    InvalidFormat { pattern: String },

    /// The weekday run contains something that is not a known abbreviation
    #[error("unknown day abbreviation in {days:?} at position {position}")]
    UnknownDayAbbreviation { days: String, position: usize },

    /// A time token inside an otherwise well-formed pattern failed to parse
    #[error("bad time in meeting pattern: {0}")]
    BadTime(#[from] FormatError),
}

/// Errors that abort a single render call.
///
/// These never escape the view dispatcher as panics; callers report them
/// through the diagnostics channel and render nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No valid weekday remained after filtering the day selection
    #[error("no valid selected days provided")]
    NoDaysSelected,

    /// View type string is not one of table, list, or calendar
    #[error("invalid view type {view:?}")]
    UnknownViewType { view: String },

    /// Visible window does not span a whole number of half-hour rows
    #[error("visible window {start}-{end} is not aligned to the half-hour grid")]
    MisalignedWindow { start: String, end: String },
}
