//! In-memory schedule store keyed by user identifier.

use dashmap::DashMap;
use std::collections::BTreeMap;

use crate::schedule::Schedule;

/// Thread-safe map of user id to schedule.
///
/// Uses DashMap for concurrent access without external locking. Holds the
/// only copy of the schedule data for the server's lifetime; renderers
/// receive resolved clones and never mutate the stored values.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    entries: DashMap<String, Schedule>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Builds a store from an ingested user-to-schedule map.
    pub fn from_map(map: BTreeMap<String, Schedule>) -> Self {
        let store = Self::new();
        for (user, schedule) in map {
            store.insert(user, schedule);
        }
        store
    }

    pub fn insert(&self, user: String, schedule: Schedule) {
        self.entries.insert(user, schedule);
    }

    /// Resolves one user's schedule, if present.
    pub fn get(&self, user: &str) -> Option<Schedule> {
        self.entries.get(user).map(|entry| entry.value().clone())
    }

    /// All known user ids, sorted.
    pub fn users(&self) -> Vec<String> {
        let mut users: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        users.sort();
        users
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_users_and_misses_unknown() {
        let store = ScheduleStore::new();
        store.insert("kgruiz".to_string(), Schedule::default());
        assert!(store.get("kgruiz").is_some());
        assert!(store.get("nobody").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn users_are_sorted() {
        let store = ScheduleStore::new();
        store.insert("zeta".to_string(), Schedule::default());
        store.insert("alpha".to_string(), Schedule::default());
        assert_eq!(store.users(), vec!["alpha", "zeta"]);
    }
}
