//! Business logic layer
//!
//! Services validate input and drive the read-modify-write cycle against the
//! expense store.

pub mod expense;
pub mod summary;

pub use expense::{AddExpenseInput, ExpenseService, UpdateExpenseInput};
pub use summary::{summarize_expenses, MonthFilterRule, Summary};
