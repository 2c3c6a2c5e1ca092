// src/ui/elements/documents.rs
use bevy::log::warn;
use bevy_egui::egui;

use crate::staff::definitions::{StaffTable, COL_NAME};

use super::state::DashboardWindowState;

pub fn show_documents_view(
    ui: &mut egui::Ui,
    state: &mut DashboardWindowState,
    table: &StaffTable,
) {
    ui.heading("📂 資格証・書類管理");
    ui.label("Googleドライブと連携した書類の写しを確認できます。");
    ui.separator();

    if !table.has_column(COL_NAME) {
        ui.colored_label(egui::Color32::RED, "職員氏名の列が見つかりません。");
        return;
    }

    let names = table.distinct_values(COL_NAME);
    let Some(first_name) = names.first() else {
        return;
    };

    // Drop a stale selection when the roster was replaced under us.
    if state
        .selected_staff
        .as_deref()
        .map_or(true, |s| !names.iter().any(|n| n == s))
    {
        state.selected_staff = Some(first_name.clone());
    }
    let mut selected = state.selected_staff.clone().unwrap_or_default();

    ui.label("職員を選択してください");
    egui::ComboBox::from_id_salt("document_staff_selector")
        .selected_text(selected.clone())
        .show_ui(ui, |ui| {
            for name in &names {
                ui.selectable_value(&mut selected, name.clone(), name.as_str());
            }
        });
    if state.selected_staff.as_deref() != Some(selected.as_str()) {
        state.selected_staff = Some(selected.clone());
    }

    // Names are not unique; the earliest row wins.
    let Some(record) = table.find_first(COL_NAME, &selected) else {
        return;
    };

    ui.add_space(8.0);
    ui.strong(format!("{} さんの書類情報", selected));

    let doc_columns = table.document_columns();
    if doc_columns.is_empty() {
        ui.colored_label(egui::Color32::YELLOW, "書類リンクの列が見つかりません。");
        return;
    }

    ui.add_space(4.0);
    ui.columns(doc_columns.len(), |slots| {
        for (slot, &col_idx) in slots.iter_mut().zip(&doc_columns) {
            let column_name = table.columns()[col_idx].as_str();
            let value = record.get(col_idx).map(String::as_str).unwrap_or("");
            if value.starts_with("http") {
                slot.strong(column_name);
                if slot.button("🔗 ファイルを開く").clicked() {
                    if let Err(e) = open::that(value) {
                        warn!("Failed to open document link '{}': {}", value, e);
                    }
                }
            } else {
                slot.label(format!("{}: 未登録", column_name));
            }
        }
    });
}
