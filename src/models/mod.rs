//! Core data models for the expense tracker
//!
//! An expense is an id, a date, an amount and a description. The value types
//! here interpret each field of a stored record.

pub mod date;
pub mod expense;
pub mod money;

pub use date::ExpenseDate;
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
