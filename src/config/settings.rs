//! User settings for the expense tracker
//!
//! Manages display preferences, the default store location and the month
//! filter rule used by `summary`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::services::MonthFilterRule;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in tables
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date display format (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How `summary --month` decides which expenses count
    #[serde(default)]
    pub month_filter: MonthFilterRule,

    /// Store file to use when neither `--file` nor the environment names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            month_filter: MonthFilterRule::default(),
            store_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }
}
