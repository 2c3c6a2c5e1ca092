// src/ui/elements/dashboard.rs
use bevy_egui::egui;

use crate::staff::definitions::{COL_OCCUPATION, COL_ROLE};
use crate::staff::resources::StaffTableCache;

// Sample figures, not derived from the sheet.
const SAMPLE_HIRES_THIS_MONTH: &str = "1 名";
const SAMPLE_DOCS_PENDING_RENEWAL: &str = "2 件";

const BAR_HEIGHT: f32 = 18.0;
const BAR_MAX_WIDTH: f32 = 260.0;
const BAR_LABEL_WIDTH: f32 = 120.0;

pub fn show_dashboard_view(ui: &mut egui::Ui, cache: &StaffTableCache) {
    let table = &cache.table;

    ui.heading("🏠 職員管理ダッシュボード");
    ui.label("組織の現状を一目で把握できます。");
    if let Some(at) = cache.last_refresh_local {
        ui.small(format!("最終更新: {}", at.format("%Y-%m-%d %H:%M")));
    }
    ui.separator();

    ui.columns(4, |columns| {
        show_metric(
            &mut columns[0],
            "総職員数",
            &format!("{} 名", table.row_count()),
        );
        let role_value = match table.distinct_count(COL_ROLE) {
            Some(n) => format!("{} 種", n),
            None => "データなし".to_string(),
        };
        show_metric(&mut columns[1], "役職種別", &role_value);
        show_metric(&mut columns[2], "今月入職", SAMPLE_HIRES_THIS_MONTH);
        show_metric(&mut columns[3], "書類更新が必要", SAMPLE_DOCS_PENDING_RENEWAL);
    });

    // The composition chart only exists when the occupation column does.
    if table.has_column(COL_OCCUPATION) {
        ui.add_space(12.0);
        ui.heading("📊 職員構成");
        let mut counts = table.value_counts(COL_OCCUPATION);
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        show_occupation_chart(ui, &counts);
    }
}

fn show_metric(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).small().weak());
        ui.label(egui::RichText::new(value).heading());
    });
}

/// Horizontal frequency bars, one per occupation, most common first.
fn show_occupation_chart(ui: &mut egui::Ui, counts: &[(String, usize)]) {
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);
    let bar_color = ui.visuals().selection.bg_fill;
    for (label, count) in counts {
        ui.horizontal(|ui| {
            ui.add_sized(
                [BAR_LABEL_WIDTH, BAR_HEIGHT],
                egui::Label::new(label.as_str()).truncate(),
            );
            let width = BAR_MAX_WIDTH * (*count as f32) / max as f32;
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(width.max(2.0), BAR_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(rect, 2.0, bar_color);
            ui.label(format!("{} 名", count));
        });
    }
}
