// src/ui/elements/settings.rs
use bevy_egui::egui;

/// Static placeholder.
pub fn show_settings_view(ui: &mut egui::Ui) {
    ui.heading("⚙️ システム設定");
    ui.label("将来的な拡張（APIキーの変更、通知設定など）をここで行います。");
}
