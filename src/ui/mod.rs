// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;

use elements::shell::staff_dashboard_ui;
use elements::state::DashboardWindowState;
use systems::{clear_ui_feedback_on_recovery, handle_ui_feedback};

/// The most recent status line shown above the active view.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the sidebar-driven dashboard UI.
pub struct DashboardUiPlugin;

impl Plugin for DashboardUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<DashboardWindowState>()
            .add_systems(Update, (handle_ui_feedback, clear_ui_feedback_on_recovery))
            .add_systems(EguiContextPass, staff_dashboard_ui);

        info!("DashboardUiPlugin initialized.");
    }
}
