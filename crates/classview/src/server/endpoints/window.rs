use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::schedule::{render_error_response, ScheduleQuery};
use crate::render::render_schedule;
use crate::schedule::{Cursor, StepDirection};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

fn parse_cursor(text: &str) -> Option<Cursor> {
    match text {
        "start" => Some(Cursor::Start),
        "end" => Some(Cursor::End),
        _ => None,
    }
}

fn parse_direction(text: &str) -> Option<StepDirection> {
    match text {
        "next" => Some(StepDirection::Forward),
        "prev" => Some(StepDirection::Backward),
        _ => None,
    }
}

/// GET /window
/// Returns the current visible-window labels.
pub async fn get_window(
    Query(q): Query<ScheduleQuery>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /window");
    let postfix = q.postfix.unwrap_or(true);
    let selector = s.selector.lock().unwrap();
    (
        StatusCode::OK,
        Json(json!({
            "start": selector.visible_start(postfix),
            "end": selector.visible_end(postfix),
        })),
    )
        .into_response()
}

/// POST /window/:cursor/:direction
/// Steps one spinner cursor ("start" or "end", "next" or "prev") and
/// re-renders. With a `user` query parameter the response is that user's
/// calendar view under the new window; otherwise just the window labels.
pub async fn post_step(
    Path((cursor, direction)): Path<(String, String)>,
    Query(q): Query<ScheduleQuery>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("POST /window/{}/{}", cursor, direction);

    let (Some(cursor), Some(direction)) = (parse_cursor(&cursor), parse_direction(&direction))
    else {
        return ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Unknown spinner cursor or direction",
            Some(format!("{cursor}/{direction}")),
        ))
        .into_response();
    };

    let (window, moved) = {
        let mut selector = s.selector.lock().unwrap();
        let moved = selector.step(cursor, direction).is_some();
        (selector.window(), moved)
    };

    // Redraw-on-step: a step with a target user answers with the calendar
    // already re-rendered against the new window.
    if let Some(user) = q.user.as_deref() {
        let schedule = s.store.get(user);
        return match render_schedule(
            schedule.as_ref(),
            "calendar",
            &q.selected_days(),
            window,
            &q.options(),
        ) {
            Ok(html) => Html(html).into_response(),
            Err(e) => render_error_response(e),
        };
    }

    let postfix = q.postfix.unwrap_or(true);
    (
        StatusCode::OK,
        Json(json!({
            "start": window.start.format(postfix),
            "end": window.end.format(postfix),
            "moved": moved,
        })),
    )
        .into_response()
}
