// src/ui/elements/state.rs
use bevy::prelude::*;

/// The four top-level views, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuView {
    #[default]
    Dashboard,
    StaffList,
    Documents,
    Settings,
}

impl MenuView {
    pub const ALL: [MenuView; 4] = [
        MenuView::Dashboard,
        MenuView::StaffList,
        MenuView::Documents,
        MenuView::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuView::Dashboard => "🏠 ダッシュボード",
            MenuView::StaffList => "👥 職員一覧",
            MenuView::Documents => "📂 書類管理",
            MenuView::Settings => "⚙️ 設定",
        }
    }
}

/// Per-window UI state: the selected view plus each view's input widgets.
/// Holds no data derived from the roster; views recompute from the cache
/// every frame.
#[derive(Resource, Default, Debug)]
pub struct DashboardWindowState {
    pub current_view: MenuView,
    pub search_query: String,
    pub selected_staff: Option<String>,
}
