//! Expense tracker - command-line expense tracking backed by a JSON file
//!
//! Every command reads the whole store file, applies one change in memory and
//! writes the whole file back.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Store and settings path resolution, user settings
//! - `error`: Custom error types
//! - `models`: Expense record and its value types
//! - `storage`: JSON file store with atomic writes
//! - `services`: Add / update / delete / list / summarize
//! - `display`: Table and summary formatting
//! - `cli`: Command definitions and handlers
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::Money;
//! use expense_tracker::services::{AddExpenseInput, ExpenseService};
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new("expenses.json");
//! let service = ExpenseService::new(&store);
//! let expense = service.add(AddExpenseInput {
//!     amount: Money::from_cents(1250),
//!     description: "Lunch".into(),
//! })?;
//! println!("added {}", expense.id().unwrap_or_default());
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
