//! Transition function for the UI slice.

use crate::mvi::Reducer;
use crate::prefs::PanePrefs;

use super::intent::UiIntent;
use super::state::{PanePosition, UiSlice};

/// Effects requested by a UI transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Write a pane collapse flag through to the preference store.
    PersistPaneCollapsed {
        position: PanePosition,
        collapsed: bool,
    },
}

/// Reducer for the UI slice.
///
/// Pure: the preference write-through of `toggle-pane` is returned as a
/// [`UiEffect`] and applied by [`update`] or [`UiStore`](crate::ui::UiStore).
pub struct UiReducer;

impl Reducer for UiReducer {
    type State = UiSlice;
    type Intent = UiIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            UiIntent::ToggleProjectSearch { value } => (
                UiSlice {
                    project_search_on: value,
                    ..state
                },
                Vec::new(),
            ),
            UiIntent::ToggleFileSearch { value } => (
                UiSlice {
                    file_search_on: value,
                    ..state
                },
                Vec::new(),
            ),
            UiIntent::ToggleSymbolSearch { value } => (
                UiSlice {
                    symbol_search_on: value,
                    ..state
                },
                Vec::new(),
            ),
            UiIntent::UpdateFileSearchQuery { query } => (
                UiSlice {
                    file_search_query: query,
                    ..state
                },
                Vec::new(),
            ),
            UiIntent::ToggleFileSearchModifier { modifier } => {
                let file_search_modifiers = state.file_search_modifiers.toggled(modifier);
                (
                    UiSlice {
                        file_search_modifiers,
                        ..state
                    },
                    Vec::new(),
                )
            }
            UiIntent::SetSymbolSearchType { symbol_type } => (
                UiSlice {
                    symbol_search_type: symbol_type,
                    ..state
                },
                Vec::new(),
            ),
            UiIntent::ShowSource { source_url } => (
                UiSlice {
                    shown_source: source_url,
                    ..state
                },
                Vec::new(),
            ),
            UiIntent::TogglePane {
                position,
                pane_collapsed,
            } => {
                let next = match position {
                    PanePosition::Start => UiSlice {
                        start_panel_collapsed: pane_collapsed,
                        ..state
                    },
                    PanePosition::End => UiSlice {
                        end_panel_collapsed: pane_collapsed,
                        ..state
                    },
                };
                (
                    next,
                    vec![UiEffect::PersistPaneCollapsed {
                        position,
                        collapsed: pane_collapsed,
                    }],
                )
            }
            UiIntent::Unrecognized => (state, Vec::new()),
        }
    }
}

/// Apply one intent to the slice, performing its effects on `prefs`.
///
/// An absent `state` starts from [`UiSlice::new`], which reads the pane
/// flags out of `prefs`.
pub fn update<P: PanePrefs + ?Sized>(
    state: Option<UiSlice>,
    intent: UiIntent,
    prefs: &P,
) -> UiSlice {
    let state = state.unwrap_or_else(|| UiSlice::new(prefs));
    dispatch(state, intent, prefs)
}

/// Reduce, then perform the resulting effects on `prefs`.
pub(crate) fn dispatch<P: PanePrefs + ?Sized>(
    state: UiSlice,
    intent: UiIntent,
    prefs: &P,
) -> UiSlice {
    tracing::debug!(intent = intent.kind(), "ui dispatch");

    let (next, effects) = UiReducer::reduce(state, intent);
    for effect in effects {
        apply_effect(effect, prefs);
    }
    next
}

fn apply_effect<P: PanePrefs + ?Sized>(effect: UiEffect, prefs: &P) {
    match effect {
        UiEffect::PersistPaneCollapsed {
            position,
            collapsed,
        } => {
            tracing::debug!(?position, collapsed, "persisting pane collapse");
            prefs.set_pane_collapsed(position, collapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;
    use crate::ui::state::{SearchModifier, SymbolSearchType};

    #[test]
    fn toggles_set_exact_value() {
        let (state, effects) = UiReducer::reduce(
            UiSlice::default(),
            UiIntent::ToggleProjectSearch { value: true },
        );
        assert!(state.project_search_on);
        assert!(effects.is_empty());

        let (state, _) = UiReducer::reduce(state, UiIntent::ToggleProjectSearch { value: true });
        assert!(state.project_search_on);

        let (state, _) = UiReducer::reduce(state, UiIntent::ToggleFileSearch { value: true });
        assert!(state.file_search_on);

        let (state, _) = UiReducer::reduce(state, UiIntent::ToggleSymbolSearch { value: false });
        assert!(!state.symbol_search_on);
    }

    #[test]
    fn query_and_source_are_replaced() {
        let (state, _) = UiReducer::reduce(
            UiSlice::default(),
            UiIntent::UpdateFileSearchQuery {
                query: "foo".to_string(),
            },
        );
        let (state, _) = UiReducer::reduce(
            state,
            UiIntent::ShowSource {
                source_url: "source-1".to_string(),
            },
        );
        assert_eq!(state.file_search_query, "foo");
        assert_eq!(state.shown_source, "source-1");
    }

    #[test]
    fn modifier_toggle_flips_and_reverts() {
        let intent = UiIntent::ToggleFileSearchModifier {
            modifier: SearchModifier::WholeWord,
        };
        let (once, _) = UiReducer::reduce(UiSlice::default(), intent.clone());
        assert!(once.file_search_modifiers.whole_word);
        assert!(once.file_search_modifiers.case_sensitive);

        let (twice, _) = UiReducer::reduce(once, intent);
        assert!(!twice.file_search_modifiers.whole_word);
    }

    #[test]
    fn symbol_type_is_set() {
        let (state, _) = UiReducer::reduce(
            UiSlice::default(),
            UiIntent::SetSymbolSearchType {
                symbol_type: SymbolSearchType::Variables,
            },
        );
        assert_eq!(state.symbol_search_type, SymbolSearchType::Variables);
    }

    #[test]
    fn toggle_pane_emits_persist_effect() {
        let (state, effects) = UiReducer::reduce(
            UiSlice::default(),
            UiIntent::TogglePane {
                position: PanePosition::End,
                pane_collapsed: true,
            },
        );
        assert!(state.end_panel_collapsed);
        assert!(!state.start_panel_collapsed);
        assert_eq!(
            effects,
            vec![UiEffect::PersistPaneCollapsed {
                position: PanePosition::End,
                collapsed: true,
            }]
        );
    }

    #[test]
    fn unrecognized_is_identity() {
        let state = UiSlice {
            file_search_query: "needle".to_string(),
            ..UiSlice::default()
        };
        let (next, effects) = UiReducer::reduce(state.clone(), UiIntent::Unrecognized);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }

    #[test]
    fn update_defaults_absent_state_from_prefs() {
        let prefs = MemoryPrefs::seeded(true, true);
        let state = update(None, UiIntent::Unrecognized, &prefs);
        assert_eq!(state, UiSlice::new(&prefs));
        assert!(state.start_panel_collapsed);
        assert!(state.end_panel_collapsed);
    }

    #[test]
    fn update_writes_pane_through_to_prefs() {
        let prefs = MemoryPrefs::default();
        let state = update(
            Some(UiSlice::default()),
            UiIntent::TogglePane {
                position: PanePosition::Start,
                pane_collapsed: true,
            },
            &prefs,
        );
        assert!(state.start_panel_collapsed);
        assert!(prefs.pane_collapsed(PanePosition::Start));
        assert!(!prefs.pane_collapsed(PanePosition::End));
    }
}
