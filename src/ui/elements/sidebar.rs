// src/ui/elements/sidebar.rs
use bevy_egui::egui;

use super::state::{DashboardWindowState, MenuView};

/// The view router: a single-selection menu in a left panel. Selection is
/// the only state it touches.
pub fn show_sidebar(ctx: &egui::Context, state: &mut DashboardWindowState) {
    egui::SidePanel::left("main_menu_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("🏢 職員管理システム");
            ui.separator();
            ui.label("メニュー");
            for view in MenuView::ALL {
                ui.selectable_value(&mut state.current_view, view, view.label());
            }
        });
}
