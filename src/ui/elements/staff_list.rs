// src/ui/elements/staff_list.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::staff::definitions::StaffTable;

use super::state::DashboardWindowState;

pub fn show_staff_list_view(
    ui: &mut egui::Ui,
    state: &mut DashboardWindowState,
    table: &StaffTable,
) {
    ui.heading("👥 職員一覧");
    ui.label("全職員の情報を一元管理します。");
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("名前や職員IDで検索");
        ui.add(egui::TextEdit::singleline(&mut state.search_query).desired_width(240.0));
    });
    ui.add_space(6.0);

    // Filtering never reorders; matching rows keep their sheet order.
    let visible_rows = table.search_matches(&state.search_query);
    let headers = table.columns();
    let num_cols = headers.len();

    egui::ScrollArea::both().auto_shrink([false; 2]).show(ui, |ui| {
        let text_style = egui::TextStyle::Body;
        let row_height = ui.text_style_height(&text_style);

        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0);

        for _ in 0..num_cols {
            builder = builder.column(Column::initial(120.0).at_least(40.0).resizable(true).clip(true));
        }

        builder
            .header(20.0, |mut header_row| {
                for header in headers {
                    header_row.col(|ui| {
                        ui.strong(header.as_str());
                    });
                }
            })
            .body(|body| {
                body.rows(row_height, visible_rows.len(), |mut row| {
                    let table_row = &table.rows()[visible_rows[row.index()]];
                    for cell in table_row {
                        row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            });
    });
}
