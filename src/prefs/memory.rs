use std::sync::Arc;

use parking_lot::RwLock;

use super::{PanePrefs, PaneValues};
use crate::ui::PanePosition;

/// In-process preference store.
///
/// Cloning yields another handle to the same values.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    inner: Arc<RwLock<PaneValues>>,
}

impl MemoryPrefs {
    pub fn new(values: PaneValues) -> Self {
        Self {
            inner: Arc::new(RwLock::new(values)),
        }
    }

    pub fn seeded(start_panel_collapsed: bool, end_panel_collapsed: bool) -> Self {
        Self::new(PaneValues {
            start_panel_collapsed,
            end_panel_collapsed,
        })
    }

    pub fn values(&self) -> PaneValues {
        *self.inner.read()
    }
}

impl PanePrefs for MemoryPrefs {
    fn pane_collapsed(&self, position: PanePosition) -> bool {
        self.inner.read().get(position)
    }

    fn set_pane_collapsed(&self, position: PanePosition, collapsed: bool) {
        self.inner.write().set(position, collapsed);
    }
}
