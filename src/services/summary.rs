//! Expense totals and the month filter used by `summary`

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Rule deciding which expenses a month filter keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MonthFilterRule {
    /// Excluded only when both the month and the year differ from the
    /// filter month and the current year, so every expense from this year
    /// is kept whatever its month.
    Legacy,
    /// Kept when the month matches, in any year
    Month,
    /// Kept when the month matches and the year is the current year
    #[default]
    CurrentYearMonth,
}

impl MonthFilterRule {
    pub const ALL: [MonthFilterRule; 3] = [Self::Legacy, Self::Month, Self::CurrentYearMonth];

    /// Whether an expense dated `date` counts toward a total for `month`.
    /// Expenses without a readable date never match.
    pub fn includes(&self, date: Option<NaiveDate>, month: Month, current_year: i32) -> bool {
        let Some(date) = date else {
            return false;
        };
        let month_matches = date.month() == month.number_from_month();
        let year_matches = date.year() == current_year;

        match self {
            Self::Legacy => month_matches || year_matches,
            Self::Month => month_matches,
            Self::CurrentYearMonth => month_matches && year_matches,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Month => "month",
            Self::CurrentYearMonth => "current-year-month",
        }
    }
}

impl fmt::Display for MonthFilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonthFilterRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown month filter rule '{}' (expected legacy, month or current-year-month)",
                    s
                )
            })
    }
}

/// Result of summarizing the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sum of all counted amounts
    pub total: Money,
    /// Month filter that was applied, if any
    pub month: Option<Month>,
    /// Number of expenses that passed the filter
    pub count: usize,
}

/// Total the given expenses, optionally restricted to a month.
/// Missing amounts count as zero. A total beyond the cent range is an error.
pub fn summarize_expenses(
    expenses: &[Expense],
    month: Option<Month>,
    rule: MonthFilterRule,
    today: NaiveDate,
) -> ExpenseResult<Summary> {
    let current_year = today.year();
    let counted: Vec<&Expense> = expenses
        .iter()
        .filter(|e| match month {
            Some(m) => rule.includes(e.date().and_then(|d| d.date()), m, current_year),
            None => true,
        })
        .collect();

    let total = counted
        .iter()
        .try_fold(Money::zero(), |total, e| total.checked_add(e.amount_or_zero()))
        .ok_or_else(|| {
            ExpenseError::Storage(format!(
                "Total of {} expenses is too large to compute",
                counted.len()
            ))
        })?;

    Ok(Summary {
        total,
        month,
        count: counted.len(),
    })
}
