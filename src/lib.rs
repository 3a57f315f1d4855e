//! UI state slice for a source debugger front end.
//!
//! Holds the UI-only flags (search panels, search query, shown source,
//! side panel collapse) and the accessors other parts of the application
//! read them through. Pane collapse state is persisted through an injected
//! [`prefs::PanePrefs`] store.

pub mod logging;
pub mod mvi;
pub mod prefs;
pub mod ui;
