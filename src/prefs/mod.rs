//! Persisted user preferences read and written by the UI slice.
//!
//! Only the two side panel collapse flags live here. The UI slice reads
//! them when it is created and writes them back on every `toggle-pane`.

mod file;
mod memory;

pub use file::{FilePrefs, PrefsError, PREFS_ENV_VAR};
pub use memory::MemoryPrefs;

use serde::{Deserialize, Serialize};

use crate::ui::PanePosition;

/// Preference store for pane collapse state.
///
/// Setters take `&self`: stores are shared handles with interior
/// mutability, so the same store can back several dispatchers.
pub trait PanePrefs {
    fn pane_collapsed(&self, position: PanePosition) -> bool;

    fn set_pane_collapsed(&self, position: PanePosition, collapsed: bool);
}

/// Raw pane flags as stored in the `[panes]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneValues {
    pub start_panel_collapsed: bool,
    pub end_panel_collapsed: bool,
}

impl PaneValues {
    pub fn get(&self, position: PanePosition) -> bool {
        match position {
            PanePosition::Start => self.start_panel_collapsed,
            PanePosition::End => self.end_panel_collapsed,
        }
    }

    pub fn set(&mut self, position: PanePosition, collapsed: bool) {
        match position {
            PanePosition::Start => self.start_panel_collapsed = collapsed,
            PanePosition::End => self.end_panel_collapsed = collapsed,
        }
    }
}
