//! Actions handled by the UI slice.

use serde::{Deserialize, Serialize};

use crate::mvi::Intent;
use crate::ui::state::{PanePosition, SearchModifier, SymbolSearchType};

/// Intents dispatched to [`UiReducer`](crate::ui::UiReducer).
///
/// On the wire each intent is a JSON object tagged by `"type"`, e.g.
/// `{"type": "toggle-pane", "position": "start", "paneCollapsed": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiIntent {
    ToggleProjectSearch {
        value: bool,
    },
    ToggleFileSearch {
        value: bool,
    },
    ToggleSymbolSearch {
        value: bool,
    },
    UpdateFileSearchQuery {
        query: String,
    },
    ToggleFileSearchModifier {
        modifier: SearchModifier,
    },
    SetSymbolSearchType {
        #[serde(rename = "symbolType")]
        symbol_type: SymbolSearchType,
    },
    ShowSource {
        #[serde(rename = "sourceUrl")]
        source_url: String,
    },
    TogglePane {
        position: PanePosition,
        #[serde(rename = "paneCollapsed")]
        pane_collapsed: bool,
    },
    /// Any action tag owned by another slice.
    #[serde(other)]
    Unrecognized,
}

impl Intent for UiIntent {}

impl UiIntent {
    /// Wire tag, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ToggleProjectSearch { .. } => "toggle-project-search",
            Self::ToggleFileSearch { .. } => "toggle-file-search",
            Self::ToggleSymbolSearch { .. } => "toggle-symbol-search",
            Self::UpdateFileSearchQuery { .. } => "update-file-search-query",
            Self::ToggleFileSearchModifier { .. } => "toggle-file-search-modifier",
            Self::SetSymbolSearchType { .. } => "set-symbol-search-type",
            Self::ShowSource { .. } => "show-source",
            Self::TogglePane { .. } => "toggle-pane",
            Self::Unrecognized => "unrecognized",
        }
    }
}
