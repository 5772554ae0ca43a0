//! Expense store backed by a single JSON file
//!
//! The whole collection is read on every operation and written back in full
//! on every change. Nothing is cached between calls.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json_optional, write_json_atomic};

/// File-backed expense collection
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store over the given file; nothing is read until `load`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the full collection; a missing file is `StoreNotFound`
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        self.read()?.ok_or_else(|| ExpenseError::StoreNotFound {
            path: self.path.clone(),
        })
    }

    /// Load the full collection; a missing file is an empty collection
    pub fn load_or_empty(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.read()?.unwrap_or_default())
    }

    /// Replace the file with the given collection
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, expenses)?;
        debug!(path = %self.path.display(), count = expenses.len(), "wrote expense store");
        Ok(())
    }

    fn read(&self) -> ExpenseResult<Option<Vec<Expense>>> {
        let expenses: Option<Vec<Expense>> = read_json_optional(&self.path)?;
        match &expenses {
            Some(list) => {
                debug!(path = %self.path.display(), count = list.len(), "read expense store")
            }
            None => debug!(path = %self.path.display(), "expense store does not exist"),
        }
        Ok(expenses)
    }
}
