//! Expense display formatting
//!
//! Renders the expense list as a table and formats summary totals.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;
use crate::services::Summary;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id().unwrap_or("-").to_string(),
            date: expense
                .date()
                .map(|d| d.format(&settings.date_format))
                .unwrap_or_else(|| "-".to_string()),
            amount: expense
                .amount()
                .map(|a| a.format_with_symbol(&settings.currency_symbol))
                .unwrap_or_else(|| "-".to_string()),
            description: expense.description().to_string(),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    let rows = expenses.iter().map(|e| ExpenseRow::new(e, settings));

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string()
}

/// One-line summary: `Total expenses: 100` or `Total expenses in March: 100`
pub fn format_summary(summary: &Summary) -> String {
    match summary.month {
        Some(month) => format!("Total expenses in {}: {}", month.name(), summary.total),
        None => format!("Total expenses: {}", summary.total),
    }
}
