// src/ui/elements/shell.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::staff::resources::{SheetsApi, StaffTableCache};
use crate::ui::UiFeedbackState;

use super::dashboard::show_dashboard_view;
use super::documents::show_documents_view;
use super::settings::show_settings_view;
use super::sidebar::show_sidebar;
use super::staff_list::show_staff_list_view;
use super::state::{DashboardWindowState, MenuView};

/// Top-level UI system: loading notice, empty-roster short circuit, or the
/// sidebar plus exactly one view. Every view is a pure function of the
/// cached table and the window state; nothing here touches the network.
pub fn staff_dashboard_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<DashboardWindowState>,
    cache: Res<StaffTableCache>,
    api: Res<SheetsApi>,
    ui_feedback: Res<UiFeedbackState>,
) {
    let ctx = contexts.ctx_mut();

    if !cache.has_completed_initial_load() {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(60.0);
                ui.spinner();
                ui.label("スプレッドシートからデータを読み込んでいます…");
            });
        });
        return;
    }

    // An empty roster (no rows, or a failed load) shows a single warning
    // instead of any view.
    if cache.table.is_empty() {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.colored_label(
                egui::Color32::YELLOW,
                "データが空です。スプレッドシートの共有設定を確認してください。",
            );
            if let Some(detail) = &cache.last_failure {
                ui.separator();
                ui.colored_label(
                    egui::Color32::RED,
                    format!("データの読み込みに失敗しました: {}", detail),
                );
                ui.label(format!(
                    "サービスアカウント: {}",
                    api.client.client_email()
                ));
                ui.label("このメールアドレスにスプレッドシートの編集権限を共有していますか？");
            }
        });
        return;
    }

    show_sidebar(ctx, &mut state);

    egui::CentralPanel::default().show(ctx, |ui| {
        show_feedback_banner(ui, &ui_feedback);
        match state.current_view {
            MenuView::Dashboard => show_dashboard_view(ui, &cache),
            MenuView::StaffList => show_staff_list_view(ui, &mut state, &cache.table),
            MenuView::Documents => show_documents_view(ui, &mut state, &cache.table),
            MenuView::Settings => show_settings_view(ui),
        }
    });
}

fn show_feedback_banner(ui: &mut egui::Ui, ui_feedback: &UiFeedbackState) {
    if ui_feedback.last_message.is_empty() {
        return;
    }
    let text_color = if ui_feedback.is_error {
        egui::Color32::RED
    } else {
        ui.style().visuals.text_color()
    };
    ui.colored_label(text_color, &ui_feedback.last_message);
    ui.separator();
}
