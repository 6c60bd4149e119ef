//! classview renders university class schedules as three interchangeable
//! views: a flat table, a grouped list, and a weekly time-grid calendar.
//!
//! The [`schedule`] module owns the data model, time parsing/conversion, the
//! meeting-pattern grammar, and the visible-window range selector; [`render`]
//! owns the three view renderers, the dispatcher, and print export. The
//! [`server`] module serves the rendered views over HTTP from an in-memory
//! [`store::ScheduleStore`].

pub mod config;
pub mod ingest;
pub mod render;
pub mod schedule;
pub mod server;
pub mod store;
pub mod types;
