//! タブ切り替え
//!
//! タブとパネルは位置ではなくIDの対応で結びつける。常に高々1つだけがアクティブ。

use crate::error::{Error, Result};

pub const DETAILS_PANEL: &str = "details-panel";
pub const SUMMARY_PANEL: &str = "summary-panel";
pub const DASHBOARD_PANEL: &str = "dashboard-panel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub panel_id: String,
    pub label: String,
}

impl Tab {
    pub fn new(id: &str, panel_id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            panel_id: panel_id.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabStrip {
    /// `active_panel` は静的に active と印の付いたパネルID
    pub fn new(tabs: Vec<Tab>, active_panel: Option<&str>) -> Self {
        let active = active_panel.and_then(|panel| tabs.iter().position(|t| t.panel_id == panel));
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// 指定タブを選択する。未知のIDなら状態を変えずにエラー
    pub fn select(&mut self, tab_id: &str) -> Result<()> {
        let index = self
            .tabs
            .iter()
            .position(|t| t.id == tab_id)
            .ok_or_else(|| Error::UnknownTab(tab_id.to_string()))?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|i| self.tabs.get(i))
    }

    pub fn is_tab_active(&self, tab_id: &str) -> bool {
        self.active_tab().map_or(false, |t| t.id == tab_id)
    }

    pub fn is_panel_active(&self, panel_id: &str) -> bool {
        self.active_tab().map_or(false, |t| t.panel_id == panel_id)
    }
}

/// 画面共通のタブ構成（詳細テーブルがアクティブ）
pub fn default_tabs() -> TabStrip {
    TabStrip::new(
        vec![
            Tab::new("details-tab", DETAILS_PANEL, "Breach Details"),
            Tab::new("summary-tab", SUMMARY_PANEL, "Scenario Summary"),
            Tab::new("dashboard-tab", DASHBOARD_PANEL, "Dashboard"),
        ],
        Some(DETAILS_PANEL),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        TabStrip::new(
            vec![
                Tab::new("tab-a", "panel-a", "A"),
                Tab::new("tab-b", "panel-b", "B"),
            ],
            Some("panel-a"),
        )
    }

    #[test]
    fn test_initial_active_from_panel() {
        let tabs = strip();
        assert!(tabs.is_tab_active("tab-a"));
        assert!(tabs.is_panel_active("panel-a"));
        assert!(!tabs.is_tab_active("tab-b"));
    }

    #[test]
    fn test_select_switches_exactly_one() {
        let mut tabs = strip();
        tabs.select("tab-b").expect("選択失敗");

        assert!(tabs.is_tab_active("tab-b"));
        assert!(tabs.is_panel_active("panel-b"));
        assert!(!tabs.is_tab_active("tab-a"));
        assert!(!tabs.is_panel_active("panel-a"));

        let active_count = tabs.tabs().iter().filter(|t| tabs.is_tab_active(&t.id)).count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_panel_matched_by_id_not_position() {
        let mut tabs = TabStrip::new(
            vec![
                Tab::new("summary", "summary-panel", "Summary"),
                Tab::new("details", "details-panel", "Details"),
            ],
            Some("details-panel"),
        );
        assert!(tabs.is_tab_active("details"));

        tabs.select("summary").expect("選択失敗");
        assert!(tabs.is_panel_active("summary-panel"));
        assert!(!tabs.is_panel_active("details-panel"));
    }

    #[test]
    fn test_unknown_tab_keeps_state() {
        let mut tabs = strip();
        let err = tabs.select("tab-z").unwrap_err();
        assert!(matches!(err, Error::UnknownTab(_)));
        assert!(tabs.is_tab_active("tab-a"));
    }

    #[test]
    fn test_no_initial_active_panel() {
        let tabs = TabStrip::new(vec![Tab::new("a", "pa", "A")], None);
        assert!(tabs.active_tab().is_none());
    }

    #[test]
    fn test_default_tabs_start_on_details() {
        let tabs = default_tabs();
        assert_eq!(tabs.tabs().len(), 3);
        assert!(tabs.is_panel_active(DETAILS_PANEL));
        assert!(!tabs.is_panel_active(SUMMARY_PANEL));
        assert!(!tabs.is_panel_active(DASHBOARD_PANEL));
    }
}
