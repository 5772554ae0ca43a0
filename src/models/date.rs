//! Expense creation date
//!
//! New records store an ISO-8601 calendar date. Older files may hold
//! locale-formatted strings such as `10/17/2026` or `17.10.2026`; those are
//! kept byte-for-byte and parsed on a best-effort basis when a calendar date
//! is needed.

use chrono::{DateTime, Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Formats tried, in order, for strings that are not ISO dates.
/// US month-first is tried before day-first, so `3/4/2026` reads as March 4.
const LEGACY_FORMATS: &[&str] = &["%m/%d/%Y", "%d/%m/%Y", "%d.%m.%Y", "%Y/%m/%d"];

/// The date an expense was recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl ExpenseDate {
    /// Today's date from the local system clock
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            raw: date.format(ISO_FORMAT).to_string(),
            parsed: Some(date),
        }
    }

    /// Wrap a persisted date string, parsing it if possible
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_date(&raw);
        Self { raw, parsed }
    }

    /// The calendar date, if the stored string could be parsed
    pub fn date(&self) -> Option<NaiveDate> {
        self.parsed
    }

    /// The string as persisted
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Render with a strftime pattern, falling back to the stored string
    pub fn format(&self, pattern: &str) -> String {
        match self.parsed {
            Some(date) => date.format(pattern).to_string(),
            None => self.raw.clone(),
        }
    }
}

/// Parse an ISO, RFC 3339 or common locale date string
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, ISO_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    LEGACY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
