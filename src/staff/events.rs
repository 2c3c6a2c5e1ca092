// src/staff/events.rs
use bevy::prelude::Event;

use super::definitions::StaffTable;

/// Outcome of one background roster fetch, delivered back to the main
/// schedule via `SendEvent` + `forward_events`.
#[derive(Event, Debug, Clone)]
pub struct StaffFetchResult {
    pub result: Result<StaffTable, String>,
}

/// User-visible status line. Handled by `ui::systems::handle_ui_feedback`.
#[derive(Event, Debug, Clone)]
pub struct StaffOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
