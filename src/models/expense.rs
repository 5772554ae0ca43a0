//! Expense model
//!
//! A single tracked expense as it appears in the store file:
//!
//! ```json
//! {
//!   "amount": 12.5,
//!   "date": "2026-10-17",
//!   "description": "Lunch",
//!   "id": "0b8f1c2e-5d1a-4f7e-9a51-3c9e2d4b7a10"
//! }
//! ```
//!
//! The record keeps the JSON object it was read from. Fields are interpreted
//! leniently on access, and only the fields a command sets are rewritten, so
//! odd values written by other tools (a string amount, a missing date, extra
//! keys) survive every rewrite unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::date::ExpenseDate;
use super::money::Money;

const ID: &str = "id";
const DATE: &str = "date";
const AMOUNT: &str = "amount";
const DESCRIPTION: &str = "description";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expense {
    fields: Map<String, Value>,
}

impl Expense {
    /// Create a new expense dated today with a fresh UUID
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self::with_date(ExpenseDate::today(), amount, description)
    }

    pub fn with_date(date: ExpenseDate, amount: Money, description: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(ID.into(), Value::from(Uuid::new_v4().to_string()));
        fields.insert(DATE.into(), Value::from(date.as_str()));
        fields.insert(AMOUNT.into(), Value::from(amount));
        fields.insert(DESCRIPTION.into(), Value::String(description.into()));
        Self { fields }
    }

    /// The record's id, if it has a string id
    pub fn id(&self) -> Option<&str> {
        self.fields.get(ID).and_then(Value::as_str)
    }

    /// Exact, case-sensitive id comparison
    pub fn matches(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    /// The recorded date; `None` when the key is missing or not a string
    pub fn date(&self) -> Option<ExpenseDate> {
        self.fields
            .get(DATE)
            .and_then(Value::as_str)
            .map(ExpenseDate::from_raw)
    }

    /// Amount spent. Numbers and numeric strings are read; anything else,
    /// or a missing key, is `None`.
    pub fn amount(&self) -> Option<Money> {
        match self.fields.get(AMOUNT)? {
            Value::Number(n) => n.as_f64().and_then(Money::from_f64),
            Value::String(s) => Money::parse(s).ok(),
            _ => None,
        }
    }

    /// The amount to use in totals; absent amounts count as zero
    pub fn amount_or_zero(&self) -> Money {
        self.amount().unwrap_or_default()
    }

    /// Free-text description; empty when missing or not a string
    pub fn description(&self) -> &str {
        self.fields
            .get(DESCRIPTION)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.fields.insert(AMOUNT.into(), Value::from(amount));
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.fields
            .insert(DESCRIPTION.into(), Value::String(description.into()));
    }
}
