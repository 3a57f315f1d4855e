//! Serialized dispatcher owning the UI slice and its preference store.

use crate::prefs::PanePrefs;

use super::intent::UiIntent;
use super::reducer::dispatch;
use super::selectors::WithUi;
use super::state::UiSlice;

pub struct UiStore<P: PanePrefs> {
    ui: UiSlice,
    prefs: P,
}

impl<P: PanePrefs> UiStore<P> {
    /// Create a store whose initial slice is read from `prefs`.
    pub fn new(prefs: P) -> Self {
        let ui = UiSlice::new(&prefs);
        Self { ui, prefs }
    }

    pub fn with_state(ui: UiSlice, prefs: P) -> Self {
        Self { ui, prefs }
    }

    /// Dispatch an intent and perform the effects it produces.
    pub fn dispatch(&mut self, intent: UiIntent) {
        self.ui = dispatch(std::mem::take(&mut self.ui), intent, &self.prefs);
    }

    pub fn state(&self) -> &UiSlice {
        &self.ui
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn into_state(self) -> UiSlice {
        self.ui
    }
}

impl<P: PanePrefs> WithUi for UiStore<P> {
    fn ui(&self) -> &UiSlice {
        &self.ui
    }
}
