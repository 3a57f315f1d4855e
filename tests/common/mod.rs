//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use debugger_ui::ui::{UiIntent, UiSlice};
use tempfile::TempDir;

/// Create a temporary prefs file with the given raw TOML content.
pub fn temp_prefs(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("prefs.toml");
    std::fs::write(&path, content).expect("Failed to write prefs file");
    (temp_dir, path)
}

/// Slice with every field moved off its default value.
pub fn busy_slice() -> UiSlice {
    UiSlice {
        file_search_on: true,
        file_search_query: "needle".to_string(),
        project_search_on: true,
        symbol_search_on: true,
        shown_source: "server1.conn1.child1/source27".to_string(),
        start_panel_collapsed: true,
        ..UiSlice::default()
    }
}

pub fn toggle_pane_start(collapsed: bool) -> UiIntent {
    UiIntent::TogglePane {
        position: debugger_ui::ui::PanePosition::Start,
        pane_collapsed: collapsed,
    }
}
