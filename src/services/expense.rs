//! Expense service
//!
//! Record management over the expense store. Every operation validates its
//! input first and only then performs one read (and at most one write) of the
//! store file.

use chrono::{Month, NaiveDate};
use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseStore;

use super::summary::{summarize_expenses, MonthFilterRule, Summary};

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct AddExpenseInput {
    pub amount: Money,
    pub description: String,
}

/// Input for updating an expense; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub id: String,
    pub amount: Option<Money>,
    pub description: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Record a new expense dated today and return it
    pub fn add(&self, input: AddExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::new(input.amount, input.description);

        let mut expenses = self.store.load_or_empty()?;
        expenses.push(expense.clone());
        self.store.save(&expenses)?;

        info!(id = expense.id().unwrap_or_default(), amount = %input.amount, "added expense");
        Ok(expense)
    }

    /// Overwrite the supplied fields of every expense with a matching id.
    ///
    /// Returns how many expenses matched. The store is rewritten even when
    /// nothing matched.
    pub fn update(&self, input: UpdateExpenseInput) -> ExpenseResult<usize> {
        let id = require_id(&input.id)?;
        if input.amount.is_none() && input.description.is_none() {
            return Err(ExpenseError::validation(
                "Please provide either amount or description",
            ));
        }

        let mut expenses = self.store.load()?;
        let mut matched = 0;
        for expense in expenses.iter_mut().filter(|e| e.matches(id)) {
            if let Some(amount) = input.amount {
                expense.set_amount(amount);
            }
            if let Some(description) = &input.description {
                expense.set_description(description.as_str());
            }
            matched += 1;
        }

        self.store.save(&expenses)?;

        if matched == 0 {
            warn!(id, "no expense matched; store left unchanged");
        } else {
            info!(id, matched, "updated expense");
        }
        Ok(matched)
    }

    /// Remove every expense with a matching id and return how many were removed
    pub fn delete(&self, id: &str) -> ExpenseResult<usize> {
        let id = require_id(id)?;

        let mut expenses = self.store.load()?;
        let before = expenses.len();
        expenses.retain(|e| !e.matches(id));
        let removed = before - expenses.len();

        self.store.save(&expenses)?;

        if removed == 0 {
            warn!(id, "no expense matched; store left unchanged");
        } else {
            info!(id, removed, "deleted expense");
        }
        Ok(removed)
    }

    /// All expenses in insertion order; a missing store is empty
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load_or_empty()
    }

    /// Total all expenses, or those `rule` accepts for `month`.
    /// `today` supplies the current year.
    pub fn summarize(
        &self,
        month: Option<Month>,
        rule: MonthFilterRule,
        today: NaiveDate,
    ) -> ExpenseResult<Summary> {
        let expenses = self.store.load()?;
        summarize_expenses(&expenses, month, rule, today)
    }
}

/// Ids are matched exactly as given; blank ones are rejected
fn require_id(id: &str) -> ExpenseResult<&str> {
    if id.trim().is_empty() {
        return Err(ExpenseError::validation("Please provide an id"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDate;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    fn seed_raw(store: &ExpenseStore, records: Value) {
        std::fs::write(store.path(), serde_json::to_string_pretty(&records).unwrap()).unwrap();
    }

    fn raw_contents(store: &ExpenseStore) -> Value {
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap()
    }

    fn seed(store: &ExpenseStore) -> Vec<Expense> {
        seed_raw(
            store,
            json!([
                { "id": "1", "date": "2026-10-01", "amount": 100, "description": "Test Expense" },
                { "id": "2", "date": "2026-10-02", "amount": 2.5, "description": "Coffee" }
            ]),
        );
        store.load().unwrap()
    }

    fn add_input(cents: i64, description: &str) -> AddExpenseInput {
        AddExpenseInput {
            amount: Money::from_cents(cents),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_add_to_absent_store() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let expense = service.add(add_input(10000, "Test Expense")).unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id(), expense.id());
        assert_eq!(stored[0].amount(), Some(Money::from_cents(10000)));
        assert_eq!(stored[0].description(), "Test Expense");
        assert!(!expense.id().unwrap().is_empty());
    }

    #[test]
    fn test_add_keeps_description_verbatim() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        service.add(add_input(100, "  two  spaces ")).unwrap();
        assert_eq!(store.load().unwrap()[0].description(), "  two  spaces ");
    }

    #[test]
    fn test_adds_accumulate_in_order() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let ids: Vec<String> = (1..=5)
            .map(|i| {
                let expense = service.add(add_input(i * 100, "item")).unwrap();
                expense.id().unwrap().to_string()
            })
            .collect();

        let stored = store.load().unwrap();
        assert_eq!(stored.len(), 5);
        assert_eq!(
            stored.iter().map(|e| e.id().unwrap()).collect::<Vec<_>>(),
            ids
        );
    }

    #[test]
    fn test_add_aborts_on_corrupt_store() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "garbage").unwrap();
        let service = ExpenseService::new(&store);

        assert!(service.add(add_input(100, "x")).is_err());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "garbage");
    }

    #[test]
    fn test_update_both_fields() {
        let (_temp_dir, store) = create_test_store();
        let before = seed(&store);
        let service = ExpenseService::new(&store);

        let matched = service
            .update(UpdateExpenseInput {
                id: "1".into(),
                amount: Some(Money::from_cents(20000)),
                description: Some("Updated Expense".into()),
            })
            .unwrap();
        assert_eq!(matched, 1);

        let stored = store.load().unwrap();
        assert_eq!(stored[0].id(), Some("1"));
        assert_eq!(stored[0].amount(), Some(Money::from_cents(20000)));
        assert_eq!(stored[0].description(), "Updated Expense");
        assert_eq!(stored[0].date(), before[0].date());
        assert_eq!(stored[1], before[1]);
    }

    #[test]
    fn test_update_only_supplied_field() {
        let (_temp_dir, store) = create_test_store();
        seed(&store);
        let service = ExpenseService::new(&store);

        service
            .update(UpdateExpenseInput {
                id: "2".into(),
                description: Some("Espresso".into()),
                ..Default::default()
            })
            .unwrap();

        let stored = store.load().unwrap();
        assert_eq!(stored[1].description(), "Espresso");
        assert_eq!(stored[1].amount(), Some(Money::from_cents(250)));
    }

    #[test]
    fn test_update_can_set_zero_amount() {
        let (_temp_dir, store) = create_test_store();
        seed(&store);
        let service = ExpenseService::new(&store);

        service
            .update(UpdateExpenseInput {
                id: "1".into(),
                amount: Some(Money::zero()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.load().unwrap()[0].amount(), Some(Money::zero()));
    }

    #[test]
    fn test_update_unknown_id_leaves_content() {
        let (_temp_dir, store) = create_test_store();
        let before = seed(&store);
        let service = ExpenseService::new(&store);

        let matched = service
            .update(UpdateExpenseInput {
                id: "missing".into(),
                amount: Some(Money::from_cents(1)),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(matched, 0);
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_rewrites_keep_unusual_records_verbatim() {
        let (_temp_dir, store) = create_test_store();
        let records = json!([
            { "id": "1", "date": "2026-10-01", "amount": 12.345, "description": "a" },
            { "id": "2", "date": "2026-10-02", "amount": "lots", "description": "b" },
            { "id": "3", "date": "10/3/2026", "amount": "12.50", "description": "c" },
            { "id": "4", "amount": 1, "description": "no date", "tag": ["x"] },
            { "id": "5", "date": null, "amount": null }
        ]);
        seed_raw(&store, records.clone());
        let service = ExpenseService::new(&store);

        let matched = service
            .update(UpdateExpenseInput {
                id: "missing".into(),
                description: Some("x".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(matched, 0);
        assert_eq!(raw_contents(&store), records);

        assert_eq!(service.delete("missing").unwrap(), 0);
        assert_eq!(raw_contents(&store), records);

        assert_eq!(service.delete("5").unwrap(), 1);
        let mut expected = records.as_array().unwrap().clone();
        expected.pop();
        assert_eq!(raw_contents(&store), Value::Array(expected));
    }

    #[test]
    fn test_ids_match_exactly() {
        let (_temp_dir, store) = create_test_store();
        seed_raw(
            &store,
            json!([{ "id": " 7 ", "date": "2026-10-01", "amount": 1, "description": "x" }]),
        );
        let service = ExpenseService::new(&store);

        assert_eq!(service.delete("7").unwrap(), 0);
        assert_eq!(service.delete(" 7 ").unwrap(), 1);
    }

    #[test]
    fn test_update_keeps_description_verbatim() {
        let (_temp_dir, store) = create_test_store();
        seed(&store);
        let service = ExpenseService::new(&store);

        service
            .update(UpdateExpenseInput {
                id: "1".into(),
                description: Some(" padded ".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.load().unwrap()[0].description(), " padded ");
    }

    #[test]
    fn test_update_validation_happens_before_io() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let err = service
            .update(UpdateExpenseInput {
                id: "  ".into(),
                amount: Some(Money::zero()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .update(UpdateExpenseInput {
                id: "1".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert!(!store.exists());
    }

    #[test]
    fn test_update_absent_store_is_error() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        let err = service
            .update(UpdateExpenseInput {
                id: "1".into(),
                amount: Some(Money::from_cents(100)),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.is_store_not_found());
        assert!(!store.exists());
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let (_temp_dir, store) = create_test_store();
        seed_raw(
            &store,
            json!([
                { "id": "1", "date": "2026-10-01", "amount": 100, "description": "a" },
                { "id": "2", "date": "2026-10-01", "amount": 1, "description": "b" },
                { "id": "1", "date": "2026-10-01", "amount": 1, "description": "dup" }
            ]),
        );
        let service = ExpenseService::new(&store);

        assert_eq!(service.delete("1").unwrap(), 2);

        let stored = store.load().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id(), Some("2"));
    }

    #[test]
    fn test_delete_unknown_id_leaves_content() {
        let (_temp_dir, store) = create_test_store();
        let before = seed(&store);
        let service = ExpenseService::new(&store);

        assert_eq!(service.delete("42").unwrap(), 0);
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_delete_requires_id_and_store() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);

        assert!(service.delete("").unwrap_err().is_validation());
        assert!(service.delete("1").unwrap_err().is_store_not_found());
    }

    #[test]
    fn test_list() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);
        assert!(service.list().unwrap().is_empty());

        let expenses = seed(&store);
        assert_eq!(service.list().unwrap(), expenses);
    }

    #[test]
    fn test_summarize() {
        let (_temp_dir, store) = create_test_store();
        let service = ExpenseService::new(&store);
        let today = chrono::Local::now().date_naive();

        assert!(service
            .summarize(None, MonthFilterRule::default(), today)
            .unwrap_err()
            .is_store_not_found());

        let expense = Expense::with_date(
            ExpenseDate::from_date(today),
            Money::from_cents(10000),
            "Test Expense",
        );
        store.save(&[expense]).unwrap();

        let summary = service
            .summarize(None, MonthFilterRule::default(), today)
            .unwrap();
        assert_eq!(summary.total, Money::from_cents(10000));
        assert_eq!(summary.total.to_string(), "100");
    }

    #[test]
    fn test_summarize_overflow_is_error() {
        let (_temp_dir, store) = create_test_store();
        seed_raw(
            &store,
            json!([{ "id": "1", "amount": 9e16 }, { "id": "2", "amount": 9e16 }]),
        );
        let service = ExpenseService::new(&store);
        let today = chrono::Local::now().date_naive();

        let err = service
            .summarize(None, MonthFilterRule::default(), today)
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }
}
