// src/staff/resources.rs
use bevy::prelude::*;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::definitions::StaffTable;
use crate::gsheets::SheetsClient;

/// A loaded roster stays valid for this long before the next frame triggers
/// a refetch.
pub const STAFF_CACHE_TTL: Duration = Duration::from_secs(600);

/// The one authorized client for this process plus the spreadsheet it reads.
/// Inserted once in `main`; consumers clone the `Arc`, never rebuild the
/// client.
#[derive(Resource)]
pub struct SheetsApi {
    pub client: Arc<SheetsClient>,
    pub spreadsheet_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffLoadState {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// TTL cache for the roster snapshot. A completed load - success or failure -
/// stamps `loaded_at`, so a failed fetch degrades to an empty table for a
/// full window instead of retrying every frame.
#[derive(Resource, Default)]
pub struct StaffTableCache {
    pub table: StaffTable,
    pub load_state: StaffLoadState,
    loaded_at: Option<Instant>,
    pub last_failure: Option<String>,
    pub last_refresh_local: Option<DateTime<Local>>,
}

impl StaffTableCache {
    pub fn needs_refresh(&self, now: Instant) -> bool {
        match self.loaded_at {
            None => true,
            Some(at) => now.duration_since(at) >= STAFF_CACHE_TTL,
        }
    }

    /// True once any load has completed; gates the initial loading screen.
    pub fn has_completed_initial_load(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn apply_success(&mut self, table: StaffTable, now: Instant) {
        self.table = table;
        self.loaded_at = Some(now);
        self.load_state = StaffLoadState::Ready;
        self.last_failure = None;
        self.last_refresh_local = Some(Local::now());
    }

    pub fn apply_failure(&mut self, error: String, now: Instant) {
        self.table = StaffTable::default();
        self.loaded_at = Some(now);
        self.load_state = StaffLoadState::Ready;
        self.last_failure = Some(error);
        self.last_refresh_local = Some(Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cache_needs_a_load() {
        let cache = StaffTableCache::default();
        assert!(cache.needs_refresh(Instant::now()));
        assert!(!cache.has_completed_initial_load());
    }

    #[test]
    fn loaded_cache_holds_for_the_ttl_window() {
        let mut cache = StaffTableCache::default();
        let now = Instant::now();
        cache.apply_success(StaffTable::default(), now);

        assert!(!cache.needs_refresh(now));
        assert!(!cache.needs_refresh(now + STAFF_CACHE_TTL - Duration::from_secs(1)));
        assert!(cache.needs_refresh(now + STAFF_CACHE_TTL));
    }

    #[test]
    fn failed_load_also_occupies_the_window() {
        let mut cache = StaffTableCache::default();
        let now = Instant::now();
        cache.apply_failure("permission denied".to_string(), now);

        assert!(cache.table.is_empty());
        assert!(cache.has_completed_initial_load());
        assert!(!cache.needs_refresh(now + Duration::from_secs(1)));
        assert_eq!(cache.last_failure.as_deref(), Some("permission denied"));
    }

    #[test]
    fn success_clears_a_previous_failure() {
        let mut cache = StaffTableCache::default();
        let now = Instant::now();
        cache.apply_failure("boom".to_string(), now);
        cache.apply_success(StaffTable::default(), now + Duration::from_secs(1));
        assert!(cache.last_failure.is_none());
    }
}
