//! UI slice of the debugger state: search panel toggles, search query,
//! shown source and side panel collapse flags.
//!
//! # Architecture
//!
//! Uses the MVI pattern from [`crate::mvi`]:
//! - `state.rs` - the `UiSlice` record and its literal enums
//! - `intent.rs` - actions, tagged by `"type"` on the wire
//! - `reducer.rs` - pure transitions, plus `update` which applies effects
//! - `selectors.rs` - accessors over any root state exposing the slice
//! - `store.rs` - dispatcher owning the slice and preference store

mod intent;
mod reducer;
mod selectors;
mod state;
mod store;

pub use intent::UiIntent;
pub use reducer::{update, UiEffect, UiReducer};
pub use selectors::{
    get_file_search_modifier_state, get_file_search_query_state, get_file_search_state,
    get_pane_collapse, get_project_search_state, get_search_state, get_shown_source,
    get_symbol_search_state, get_symbol_search_type, RootState, WithUi,
};
pub use state::{
    FileSearchModifiers, PanePosition, SearchField, SearchModifier, SymbolSearchType, UiSlice,
};
pub use store::UiStore;
