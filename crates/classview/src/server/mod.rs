use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::server::endpoints::{schedule, status, window};
use crate::types::AppState;

mod endpoints;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Schedule view rendering
    let schedule_router = Router::new()
        .route("/users", get(schedule::get_users))
        .route("/schedule/:user", get(schedule::get_schedule))
        .route("/schedule/:user/print", get(schedule::get_schedule_print));

    // Visible-window spinner controls
    let window_router = Router::new()
        .route("/window", get(window::get_window))
        .route("/window/:cursor/:direction", post(window::post_step));

    Router::new()
        .route("/health", get(status::get_health))
        .merge(schedule_router)
        .merge(window_router)
        .with_state(app_state)
}
