//! Shared server state.

use std::sync::Mutex;

use crate::config::AppConfig;
use crate::schedule::RangeSelector;
use crate::store::ScheduleStore;

/// State shared by every endpoint.
pub struct AppState {
    /// All loaded schedules, keyed by user id
    pub store: ScheduleStore,
    /// The visible-window selector; persists across renders for the
    /// server's lifetime. Held briefly and never across an await.
    pub selector: Mutex<RangeSelector>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: ScheduleStore, selector: RangeSelector, config: AppConfig) -> Self {
        Self {
            store,
            selector: Mutex::new(selector),
            config,
        }
    }
}
