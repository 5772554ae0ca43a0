//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain JSON number in currency units, so
//! `1050` cents is written as `10.5` and `10000` cents as `100`.

use serde_json::Value;
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a floating-point value in currency units,
    /// rounding half away from zero to the nearest cent. Returns `None` for
    /// NaN, infinities and values outside the cent range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Amount in currency units as a float
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Add two amounts, or `None` if the result does not fit
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5", "1e3".
    /// Amounts finer than a cent are rounded the same way as
    /// [`Money::from_f64`], so `12.345` from the command line and `12.345`
    /// read from a file give the same value.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // Plain decimal or exponent notation only; rules out "inf", "NaN" and
        // a second sign
        if rest.is_empty()
            || rest.starts_with(|c: char| c == '+' || c == '-')
            || !rest
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        {
            return Err(invalid());
        }

        let value: f64 = rest.parse().map_err(|_| invalid())?;
        let money = Self::from_f64(value).ok_or_else(invalid)?;

        Ok(if negative { Self(-money.0) } else { money })
    }

    /// Format with a currency symbol and two decimal places
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

/// Plain decimal without trailing zeros: `100`, `12.5`, `0.05`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        let cents = self.cents_part();

        if cents == 0 {
            write!(f, "{}{}", sign, units)
        } else if cents % 10 == 0 {
            write!(f, "{}{}.{}", sign, units, cents / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, units, cents)
        }
    }
}

/// JSON number in currency units; whole amounts are written as integers
impl From<Money> for Value {
    fn from(money: Money) -> Self {
        if money.cents_part() == 0 {
            Value::from(money.units())
        } else {
            Value::from(money.as_f64())
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
