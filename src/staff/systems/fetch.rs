// src/staff/systems/fetch.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use std::time::Instant;

use crate::staff::definitions::StaffTable;
use crate::staff::events::{StaffFetchResult, StaffOperationFeedback};
use crate::staff::resources::{SheetsApi, StaffLoadState, StaffTableCache};
use crate::ui::systems::SendEvent;

/// Spawns one background roster fetch whenever the cache window has lapsed.
/// Runs every frame; the `Loading` guard keeps at most one fetch in flight,
/// so a lapsed TTL is picked up by whichever render comes next.
pub fn trigger_staff_refresh(
    mut cache: ResMut<StaffTableCache>,
    api: Res<SheetsApi>,
    runtime: Res<TokioTasksRuntime>,
    mut commands: Commands,
) {
    if cache.load_state == StaffLoadState::Loading {
        return;
    }
    if !cache.needs_refresh(Instant::now()) {
        return;
    }

    cache.load_state = StaffLoadState::Loading;
    let client = api.client.clone();
    let spreadsheet_id = api.spreadsheet_id.clone();
    let result_entity = commands.spawn_empty().id();

    debug!("Staff cache lapsed; fetching spreadsheet '{}'.", spreadsheet_id);

    runtime.spawn_background_task(move |mut ctx| async move {
        let result = client
            .read_first_worksheet(&spreadsheet_id)
            .await
            .map(StaffTable::from_values)
            .map_err(|e| e.to_string());

        ctx.run_on_main_thread(move |world_ctx| {
            world_ctx
                .world
                .commands()
                .entity(result_entity)
                .insert(SendEvent::<StaffFetchResult> {
                    event: StaffFetchResult { result },
                });
        })
        .await;
    });
}

/// Applies fetch outcomes to the cache. A failure replaces the table with an
/// empty one and raises a feedback banner carrying the raw error and the
/// sharing guidance; the UI stays up either way.
pub fn handle_staff_fetch_results(
    mut results: EventReader<StaffFetchResult>,
    mut cache: ResMut<StaffTableCache>,
    mut feedback_writer: EventWriter<StaffOperationFeedback>,
) {
    for ev in results.read() {
        match &ev.result {
            Ok(table) => {
                info!(
                    "Loaded {} staff rows ({} columns).",
                    table.row_count(),
                    table.columns().len()
                );
                cache.apply_success(table.clone(), Instant::now());
            }
            Err(err) => {
                error!("Staff data load failed: {}", err);
                cache.apply_failure(err.clone(), Instant::now());
                feedback_writer.write(StaffOperationFeedback {
                    message: format!("データの読み込みに失敗しました: {}", err),
                    is_error: true,
                });
            }
        }
    }
}
