// src/staff/plugin.rs
use bevy::prelude::*;

use super::events::{StaffFetchResult, StaffOperationFeedback};
use super::resources::StaffTableCache;
use super::systems;
use crate::ui::systems::forward_events;

/// Plugin owning the roster snapshot: the TTL cache resource, the fetch
/// events, and the refresh systems. The UI only ever reads the cache.
pub struct StaffDataPlugin;

impl Plugin for StaffDataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StaffTableCache>();

        app.add_event::<StaffFetchResult>()
            .add_event::<StaffOperationFeedback>();

        // Trigger before forwarding so a fetch finishing this frame lands in
        // the same update.
        app.add_systems(
            Update,
            (
                systems::fetch::trigger_staff_refresh,
                forward_events::<StaffFetchResult>,
                systems::fetch::handle_staff_fetch_results,
            )
                .chain(),
        );

        info!("StaffDataPlugin initialized.");
    }
}
