//! TOML-backed preference store.
//!
//! The pane flags live in a `[panes]` table:
//!
//! ```toml
//! [panes]
//! start_panel_collapsed = false
//! end_panel_collapsed = true
//! ```
//!
//! Other tables, and other keys inside `[panes]`, are preserved on write.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use super::{PanePrefs, PaneValues};
use crate::ui::PanePosition;

/// Overrides the default preference file location.
pub const PREFS_ENV_VAR: &str = "DEBUGGER_UI_PREFS";

const PANES_TABLE: &str = "panes";
const START_PANEL_KEY: &str = "start_panel_collapsed";
const END_PANEL_KEY: &str = "end_panel_collapsed";

/// Errors that can occur when reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to read prefs file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse prefs file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize prefs for '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    #[error("Failed to write prefs file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Preference store persisted to a TOML file.
///
/// Values are cached in memory; every write updates the cache and then
/// rewrites the file. Clones share the cache and the path.
#[derive(Debug, Clone)]
pub struct FilePrefs {
    inner: Arc<RwLock<PaneValues>>,
    path: PathBuf,
}

impl FilePrefs {
    /// Returns the path of the preference file.
    ///
    /// Uses `$DEBUGGER_UI_PREFS` when set, otherwise
    /// `debugger-ui/prefs.toml` under `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(PREFS_ENV_VAR) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("debugger-ui").join("prefs.toml")
    }

    /// Loads preferences from [`FilePrefs::default_path`].
    pub fn load() -> Result<Self, PrefsError> {
        Self::load_from(Self::default_path())
    }

    /// Loads preferences from `path`.
    ///
    /// A missing file, or a file without a `[panes]` table, yields the
    /// default values. Nothing is written until a value changes.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match read_table(&path)? {
            Some(mut table) => match table.remove(PANES_TABLE) {
                Some(panes) => panes.try_into::<PaneValues>().map_err(|e| PrefsError::Parse {
                    path: path.clone(),
                    source: e,
                })?,
                None => PaneValues::default(),
            },
            None => PaneValues::default(),
        };

        tracing::debug!(path = %path.display(), ?values, "loaded pane prefs");
        Ok(Self {
            inner: Arc::new(RwLock::new(values)),
            path,
        })
    }

    /// Writes the cached values to disk, creating parent directories.
    pub fn save(&self) -> Result<(), PrefsError> {
        let values = self.values();
        let mut table = read_table(&self.path)?.unwrap_or_default();

        // Only the pane keys are owned here; anything else in `[panes]` stays.
        let mut panes = match table.remove(PANES_TABLE) {
            Some(toml::Value::Table(panes)) => panes,
            _ => toml::Table::new(),
        };
        panes.insert(
            START_PANEL_KEY.to_string(),
            toml::Value::Boolean(values.start_panel_collapsed),
        );
        panes.insert(
            END_PANEL_KEY.to_string(),
            toml::Value::Boolean(values.end_panel_collapsed),
        );
        table.insert(PANES_TABLE.to_string(), toml::Value::Table(panes));

        let content = toml::to_string(&table).map_err(|e| PrefsError::Serialize {
            path: self.path.clone(),
            source: e,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| PrefsError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }
        fs::write(&self.path, content).map_err(|e| PrefsError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    pub fn values(&self) -> PaneValues {
        *self.inner.read()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PanePrefs for FilePrefs {
    fn pane_collapsed(&self, position: PanePosition) -> bool {
        self.inner.read().get(position)
    }

    /// Updates the cached value and persists it. A failed write is logged
    /// and the cached value is kept.
    fn set_pane_collapsed(&self, position: PanePosition, collapsed: bool) {
        self.inner.write().set(position, collapsed);
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "failed to persist pane prefs");
        }
    }
}

fn read_table(path: &Path) -> Result<Option<toml::Table>, PrefsError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| PrefsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table = toml::from_str(&content).map_err(|e| PrefsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(table))
}
