// src/ui/systems.rs
use bevy::prelude::*;

use crate::staff::events::{StaffFetchResult, StaffOperationFeedback};
use crate::ui::UiFeedbackState;

/// Collapses this frame's feedback events into the single banner the shell
/// renders. A non-error message wins over earlier errors in the same batch;
/// otherwise the last error sticks.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<StaffOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Drops a lingering error banner once a later fetch succeeds, so a
/// recovered roster is not overshadowed by the previous window's failure.
pub fn clear_ui_feedback_on_recovery(
    mut results: EventReader<StaffFetchResult>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    for ev in results.read() {
        if ev.result.is_ok() && ui_feedback_state.is_error {
            ui_feedback_state.last_message.clear();
            ui_feedback_state.is_error = false;
        }
    }
}

/// Carrier for an event produced off the main schedule. Background tasks
/// attach it to a pre-spawned entity from `run_on_main_thread`; the next
/// `forward_events` run turns it into a real Bevy event.
#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
) {
    for (entity, pending) in query.iter() {
        debug!("Forwarding background task event: {:?}", pending.event);
        writer.write(pending.event.clone());
        commands.entity(entity).remove::<SendEvent<E>>();
        commands.entity(entity).despawn();
    }
}
