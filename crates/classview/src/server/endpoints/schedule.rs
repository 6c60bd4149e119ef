use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::render::{render_print_document, render_schedule, DisplayOptions};
use crate::schedule::{RenderError, Weekday};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// Query parameters shared by the view-rendering and window endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    /// View type: "table", "list", or "calendar" (default "list")
    pub view: Option<String>,
    /// Comma-separated full day names, e.g. "Monday,Wednesday,Friday"
    pub days: Option<String>,
    /// Window endpoints only: label form (12-hour when absent or true)
    pub postfix: Option<bool>,
    /// Window endpoints only: user whose calendar a step re-renders
    pub user: Option<String>,
    pub show_time_postfix: Option<bool>,
    pub show_class_title: Option<bool>,
    pub show_instructor: Option<bool>,
    pub show_location: Option<bool>,
    pub show_time: Option<bool>,
}

impl ScheduleQuery {
    pub fn view(&self) -> &str {
        self.view.as_deref().unwrap_or("list")
    }

    pub fn options(&self) -> DisplayOptions {
        let defaults = DisplayOptions::default();
        DisplayOptions {
            show_time_postfix: self.show_time_postfix.unwrap_or(defaults.show_time_postfix),
            show_class_title: self.show_class_title.unwrap_or(defaults.show_class_title),
            show_instructor: self.show_instructor.unwrap_or(defaults.show_instructor),
            show_location: self.show_location.unwrap_or(defaults.show_location),
            show_time: self.show_time.unwrap_or(defaults.show_time),
        }
    }

    /// Day columns for the calendar. Unknown names are dropped with a
    /// diagnostic; an absent or blank parameter selects Monday-Friday.
    pub fn selected_days(&self) -> Vec<Weekday> {
        let Some(days) = self.days.as_deref().filter(|d| !d.trim().is_empty()) else {
            return Weekday::WEEKDAYS.to_vec();
        };

        days.split(',')
            .filter_map(|name| {
                let day = Weekday::from_name(name);
                if day.is_none() {
                    warn!(name = name.trim(), "dropping unknown day name");
                }
                day
            })
            .collect()
    }
}

pub(super) fn render_error_response(e: RenderError) -> Response {
    ApiErrorType::from((
        StatusCode::BAD_REQUEST,
        "Failed to render schedule view",
        Some(e.to_string()),
    ))
    .into_response()
}

/// GET /users
/// Lists the user ids with a loaded schedule.
pub async fn get_users(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /users");
    (StatusCode::OK, Json(s.store.users())).into_response()
}

/// GET /schedule/:user
/// Renders the user's schedule in the requested view.
pub async fn get_schedule(
    Path(user): Path<String>,
    Query(q): Query<ScheduleQuery>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /schedule/{} view={}", user, q.view());

    let schedule = s.store.get(&user);
    let window = s.selector.lock().unwrap().window();

    match render_schedule(
        schedule.as_ref(),
        q.view(),
        &q.selected_days(),
        window,
        &q.options(),
    ) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_error_response(e),
    }
}

/// GET /schedule/:user/print
/// Renders the view and wraps it in a print-formatted document.
pub async fn get_schedule_print(
    Path(user): Path<String>,
    Query(q): Query<ScheduleQuery>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /schedule/{}/print view={}", user, q.view());

    let schedule = s.store.get(&user);
    let window = s.selector.lock().unwrap().window();

    match render_schedule(
        schedule.as_ref(),
        q.view(),
        &q.selected_days(),
        window,
        &q.options(),
    ) {
        Ok(html) => Html(render_print_document(&html)).into_response(),
        Err(e) => render_error_response(e),
    }
}
