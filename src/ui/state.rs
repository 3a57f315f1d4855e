//! Shape of the UI slice.

use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;
use crate::prefs::PanePrefs;

/// Which side panel a pane action or query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanePosition {
    Start,
    End,
}

/// Kind of symbol listed by the symbol search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSearchType {
    #[default]
    Functions,
    Variables,
}

/// One of the in-file search modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchModifier {
    CaseSensitive,
    WholeWord,
    RegexMatch,
}

/// The three search panel visibility flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    ProjectSearchOn,
    FileSearchOn,
    SymbolSearchOn,
}

/// Modifiers applied to the in-file search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSearchModifiers {
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub regex_match: bool,
}

impl Default for FileSearchModifiers {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            whole_word: false,
            regex_match: false,
        }
    }
}

impl FileSearchModifiers {
    pub fn get(&self, modifier: SearchModifier) -> bool {
        match modifier {
            SearchModifier::CaseSensitive => self.case_sensitive,
            SearchModifier::WholeWord => self.whole_word,
            SearchModifier::RegexMatch => self.regex_match,
        }
    }

    /// Copy of `self` with `modifier` inverted.
    pub fn toggled(self, modifier: SearchModifier) -> Self {
        match modifier {
            SearchModifier::CaseSensitive => Self {
                case_sensitive: !self.case_sensitive,
                ..self
            },
            SearchModifier::WholeWord => Self {
                whole_word: !self.whole_word,
                ..self
            },
            SearchModifier::RegexMatch => Self {
                regex_match: !self.regex_match,
                ..self
            },
        }
    }
}

/// UI-only flags of the debugger: search panels, query text, shown source
/// and side panel collapse state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSlice {
    pub file_search_on: bool,
    pub file_search_query: String,
    pub file_search_modifiers: FileSearchModifiers,
    pub project_search_on: bool,
    pub symbol_search_on: bool,
    pub symbol_search_type: SymbolSearchType,
    /// Identifier or URL of the source currently displayed. Empty when none.
    pub shown_source: String,
    pub start_panel_collapsed: bool,
    pub end_panel_collapsed: bool,
}

impl SliceState for UiSlice {}

impl UiSlice {
    /// Initial slice, with pane collapse flags read from `prefs` now.
    pub fn new<P: PanePrefs + ?Sized>(prefs: &P) -> Self {
        Self {
            start_panel_collapsed: prefs.pane_collapsed(PanePosition::Start),
            end_panel_collapsed: prefs.pane_collapsed(PanePosition::End),
            ..Self::default()
        }
    }

    pub fn search_on(&self, field: SearchField) -> bool {
        match field {
            SearchField::ProjectSearchOn => self.project_search_on,
            SearchField::FileSearchOn => self.file_search_on,
            SearchField::SymbolSearchOn => self.symbol_search_on,
        }
    }

    pub fn pane_collapsed(&self, position: PanePosition) -> bool {
        match position {
            PanePosition::Start => self.start_panel_collapsed,
            PanePosition::End => self.end_panel_collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPrefs;

    #[test]
    fn default_modifiers_are_case_sensitive_only() {
        let modifiers = FileSearchModifiers::default();
        assert!(modifiers.get(SearchModifier::CaseSensitive));
        assert!(!modifiers.get(SearchModifier::WholeWord));
        assert!(!modifiers.get(SearchModifier::RegexMatch));
    }

    #[test]
    fn toggled_flips_only_the_named_modifier() {
        let modifiers = FileSearchModifiers::default().toggled(SearchModifier::RegexMatch);
        assert_eq!(
            modifiers,
            FileSearchModifiers {
                case_sensitive: true,
                whole_word: false,
                regex_match: true,
            }
        );
    }

    #[test]
    fn new_reads_pane_flags_from_prefs() {
        let prefs = MemoryPrefs::seeded(true, false);
        let slice = UiSlice::new(&prefs);
        assert!(slice.start_panel_collapsed);
        assert!(!slice.end_panel_collapsed);
        assert_eq!(slice.symbol_search_type, SymbolSearchType::Functions);
        assert!(slice.shown_source.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(UiSlice::default()).unwrap();
        assert_eq!(json["fileSearchModifiers"]["caseSensitive"], true);
        assert_eq!(json["symbolSearchType"], "functions");
        assert_eq!(json["startPanelCollapsed"], false);
    }
}
