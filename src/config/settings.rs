//! User settings for the expense tracker
//!
//! Stored as JSON in `config.json`. Missing fields fall back to defaults so
//! older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{GroupKey, SortSpec};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Order used by `list` and `export` when no sort flags are given
    #[serde(default)]
    pub default_sort: SortSpec,

    /// Grouping used by `list` when no `--group` flag is given
    #[serde(default)]
    pub default_group: GroupKey,

    /// Number of audit entries `history` shows by default
    #[serde(default = "default_recent_history")]
    pub recent_history: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_recent_history() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_sort: SortSpec::default(),
            default_group: GroupKey::default(),
            recent_history: default_recent_history(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Never writes; call `save` to persist.
    pub fn load_or_create(paths: &ExpensePaths) -> ExpenseResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> ExpenseResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
