//! Path management for the expense tracker
//!
//! ## Store file resolution order
//!
//! 1. `--file` flag or `EXPENSE_TRACKER_FILE` environment variable
//! 2. `store_file` in the settings file
//! 3. `expenses.json` in the current working directory
//!
//! ## Settings directory resolution order
//!
//! 1. `EXPENSE_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expense-tracker` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use super::settings::Settings;
use crate::error::ExpenseError;

/// Store file used when nothing else is configured
pub const DEFAULT_STORE_FILE: &str = "expenses.json";

/// Environment variable overriding the settings directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_TRACKER_CONFIG_DIR";

/// Resolves every path the expense tracker touches
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    config_dir: PathBuf,
    store_override: Option<PathBuf>,
}

impl ExpensePaths {
    /// Resolve the settings directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "expense-tracker")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ExpenseError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self::with_config_dir(config_dir))
    }

    /// Create paths rooted at a custom settings directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            config_dir,
            store_override: None,
        }
    }

    /// Force a store file, taking precedence over settings
    pub fn with_store_file(mut self, store_file: Option<PathBuf>) -> Self {
        self.store_override = store_file;
        self
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Get the path to the store file
    pub fn store_file(&self, settings: &Settings) -> PathBuf {
        self.store_override
            .clone()
            .or_else(|| settings.store_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_store_file_defaults_to_working_directory() {
        let paths = ExpensePaths::with_config_dir(PathBuf::from("/unused"));
        assert_eq!(
            paths.store_file(&Settings::default()),
            PathBuf::from("expenses.json")
        );
    }

    #[test]
    fn test_store_file_precedence() {
        let paths = ExpensePaths::with_config_dir(PathBuf::from("/unused"));
        let mut settings = Settings::default();
        settings.store_file = Some(PathBuf::from("/data/from-settings.json"));
        assert_eq!(
            paths.store_file(&settings),
            PathBuf::from("/data/from-settings.json")
        );

        let paths = paths.with_store_file(Some(PathBuf::from("/data/from-flag.json")));
        assert_eq!(
            paths.store_file(&settings),
            PathBuf::from("/data/from-flag.json")
        );
    }
}
