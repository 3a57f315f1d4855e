//! Read-only accessors over a root state that contains the UI slice.

use super::state::{FileSearchModifiers, PanePosition, SearchField, SymbolSearchType, UiSlice};

/// Root state that exposes the UI slice.
///
/// Hosts composing several slices implement this for their root type so
/// the accessors below can be called against it directly.
pub trait WithUi {
    fn ui(&self) -> &UiSlice;
}

/// Minimal root state holding only the UI slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RootState {
    pub ui: UiSlice,
}

impl WithUi for RootState {
    fn ui(&self) -> &UiSlice {
        &self.ui
    }
}

impl WithUi for UiSlice {
    fn ui(&self) -> &UiSlice {
        self
    }
}

/// Reads whichever search panel flag `field` names.
pub fn get_search_state<S: WithUi + ?Sized>(field: SearchField, state: &S) -> bool {
    state.ui().search_on(field)
}

/// Whether the project search panel is open.
pub fn get_project_search_state<S: WithUi + ?Sized>(state: &S) -> bool {
    get_search_state(SearchField::ProjectSearchOn, state)
}

/// Whether the in-file search panel is open.
pub fn get_file_search_state<S: WithUi + ?Sized>(state: &S) -> bool {
    get_search_state(SearchField::FileSearchOn, state)
}

/// Whether the symbol search panel is open.
pub fn get_symbol_search_state<S: WithUi + ?Sized>(state: &S) -> bool {
    get_search_state(SearchField::SymbolSearchOn, state)
}

/// Current in-file search text.
pub fn get_file_search_query_state<S: WithUi + ?Sized>(state: &S) -> &str {
    &state.ui().file_search_query
}

/// Case, whole-word and regex modifiers of the in-file search.
pub fn get_file_search_modifier_state<S: WithUi + ?Sized>(state: &S) -> FileSearchModifiers {
    state.ui().file_search_modifiers
}

/// Kind of symbol the symbol search lists.
pub fn get_symbol_search_type<S: WithUi + ?Sized>(state: &S) -> SymbolSearchType {
    state.ui().symbol_search_type
}

/// Source currently displayed; empty when none.
pub fn get_shown_source<S: WithUi + ?Sized>(state: &S) -> &str {
    &state.ui().shown_source
}

/// Collapse flag of the start or end side panel, picked by `position`.
pub fn get_pane_collapse<S: WithUi + ?Sized>(state: &S, position: PanePosition) -> bool {
    state.ui().pane_collapsed(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> RootState {
        RootState {
            ui: UiSlice {
                project_search_on: true,
                symbol_search_on: true,
                file_search_query: "query".to_string(),
                shown_source: "source-7".to_string(),
                end_panel_collapsed: true,
                ..UiSlice::default()
            },
        }
    }

    #[test]
    fn search_specializations_read_their_field() {
        let state = root();
        assert!(get_project_search_state(&state));
        assert!(!get_file_search_state(&state));
        assert!(get_symbol_search_state(&state));
        assert_eq!(
            get_search_state(SearchField::FileSearchOn, &state),
            get_file_search_state(&state)
        );
    }

    #[test]
    fn pane_collapse_follows_position() {
        let state = root();
        assert!(!get_pane_collapse(&state, PanePosition::Start));
        assert!(get_pane_collapse(&state, PanePosition::End));
    }

    #[test]
    fn string_and_record_fields() {
        let state = root();
        assert_eq!(get_file_search_query_state(&state), "query");
        assert_eq!(get_shown_source(&state), "source-7");
        assert_eq!(
            get_file_search_modifier_state(&state),
            FileSearchModifiers::default()
        );
        assert_eq!(get_symbol_search_type(&state), SymbolSearchType::Functions);
    }
}
