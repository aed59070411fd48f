use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar-month period key in `YYYY-MM` form.
///
/// Ordering is the plain string ordering, which coincides with chronological
/// order for zero-padded keys. Malformed keys still compare; their position
/// relative to well-formed keys is unspecified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_ym(year: i32, month: u32) -> Self {
        Self(format!("{:04}-{:02}", year, month))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the key matches `YYYY-MM` with a real month number.
    pub fn is_well_formed(&self) -> bool {
        self.first_of_month().is_some()
    }

    /// Human-readable name, e.g. `"March 2024"`. Malformed keys fall back to
    /// the raw string.
    pub fn display_name(&self) -> String {
        match self.first_of_month() {
            Some(date) => date.format("%B %Y").to_string(),
            None => self.0.clone(),
        }
    }

    fn first_of_month(&self) -> Option<NaiveDate> {
        let (year, month) = self.0.split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        let year = year.parse().ok()?;
        let month = month.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MonthKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}
