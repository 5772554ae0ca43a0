//! Expense CLI commands
//!
//! Each subcommand reads the program-level flags it needs and hands off to
//! the expense service.

use std::path::PathBuf;

use chrono::Month;
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::{AddExpenseInput, ExpenseService, MonthFilterRule, UpdateExpenseInput};
use crate::storage::ExpenseStore;

/// Flags defined once at the program level and shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct ExpenseArgs {
    /// Amount of expense
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Description of expense
    #[arg(short, long, global = true)]
    pub description: Option<String>,

    /// ID of expense
    #[arg(short, long, global = true)]
    pub id: Option<String>,

    /// Month of expense (1-12)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Expense store file (defaults to ./expenses.json)
    #[arg(short, long, global = true, env = "EXPENSE_TRACKER_FILE")]
    pub file: Option<PathBuf>,
}

/// Expense subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add,
    /// Update existing expense
    Update,
    /// Delete existing expense
    Delete,
    /// List all expenses
    List,
    /// Get summary of expenses
    Summary {
        /// Month filter rule: legacy, month or current-year-month
        #[arg(long)]
        rule: Option<MonthFilterRule>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
    args: &ExpenseArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add => {
            let amount = args
                .amount
                .as_deref()
                .ok_or_else(|| ExpenseError::validation("Please provide an amount (--amount)"))?;
            let description = args.description.clone().ok_or_else(|| {
                ExpenseError::validation("Please provide a description (--description)")
            })?;

            let input = AddExpenseInput {
                amount: parse_amount(amount)?,
                description,
            };

            let expense = service.add(input)?;
            println!(
                "Expense added successfully (ID: {})",
                expense.id().unwrap_or_default()
            );
        }
        ExpenseCommands::Update => {
            let id = args.id.clone().unwrap_or_default();
            let amount = args.amount.as_deref().map(parse_amount).transpose()?;

            let input = UpdateExpenseInput {
                id: id.clone(),
                amount,
                description: args.description.clone(),
            };

            if service.update(input)? > 0 {
                println!("Expense updated successfully (ID: {})", id);
            }
        }
        ExpenseCommands::Delete => {
            let id = args.id.as_deref().unwrap_or_default();
            if service.delete(id)? > 0 {
                println!("Expense deleted successfully");
            }
        }
        ExpenseCommands::List => {
            let expenses = service.list()?;
            if !expenses.is_empty() {
                println!("{}", format_expense_table(&expenses, settings));
            }
        }
        ExpenseCommands::Summary { rule } => {
            let month = args.month.map(parse_month).transpose()?;
            let rule = rule.unwrap_or(settings.month_filter);
            let today = chrono::Local::now().date_naive();

            let summary = service.summarize(month, rule, today)?;
            println!("{}", format_summary(&summary));
        }
    }

    Ok(())
}

/// Parse a user-supplied amount such as `12.50` or `$12.50`
pub fn parse_amount(amount: &str) -> ExpenseResult<Money> {
    Money::parse(amount).map_err(|e| {
        ExpenseError::Validation(format!("{}. Use a number like '12.50' or '100'", e))
    })
}

/// Convert a month number (1-12) to a calendar month
pub fn parse_month(month: u8) -> ExpenseResult<Month> {
    Month::try_from(month)
        .map_err(|_| ExpenseError::Validation(format!("Invalid month: {} (expected 1-12)", month)))
}
