//! Month keys and the month-selection range
//!
//! A [`MonthKey`] identifies either a single calendar month
//! (`YYYY-MM`) or the sentinel `all`. [`months_covering_range`]
//! produces the option list a month-selection control renders: the
//! sentinel first, then every month from a fixed start through the
//! current month.

use crate::types::LedgerError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// First month the selector offers (January 2024)
pub const RANGE_START_YEAR: i32 = 2024;
/// First month the selector offers (January 2024)
pub const RANGE_START_MONTH: u32 = 1;

/// A month filter: one calendar month, or everything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthKey {
    /// The sentinel `all`: no filtering
    All,
    /// One calendar month
    Month {
        /// Calendar year
        year: i32,
        /// Month 1-12
        month: u32,
    },
}

impl MonthKey {
    /// Whether a date falls inside this key's month
    ///
    /// `All` matches every date.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            MonthKey::All => true,
            MonthKey::Month { year, month } => date.year() == *year && date.month() == *month,
        }
    }
}

impl FromStr for MonthKey {
    type Err = LedgerError;

    /// Parse `all` or a `YYYY-MM` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(MonthKey::All);
        }

        let invalid = || LedgerError::validation_failed("month", "expected 'all' or YYYY-MM");

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(MonthKey::Month { year, month })
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKey::All => write!(f, "all"),
            MonthKey::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
        }
    }
}

/// One entry of the month-selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    /// Machine value: `all` or `YYYY-MM`
    pub value: String,
    /// Display label: `ALL MONTHS` or `January 2024` style
    pub label: String,
}

/// Lazy, finite, restartable sequence of month options
///
/// Produced by [`months_covering_range`]. Cloning restarts the
/// sequence from the sentinel.
#[derive(Debug, Clone)]
pub struct MonthRange {
    sentinel_pending: bool,
    next: Option<(i32, u32)>,
    end: (i32, u32),
}

impl Iterator for MonthRange {
    type Item = MonthOption;

    fn next(&mut self) -> Option<Self::Item> {
        if self.sentinel_pending {
            self.sentinel_pending = false;
            return Some(MonthOption {
                value: "all".to_string(),
                label: "ALL MONTHS".to_string(),
            });
        }

        let (year, month) = self.next?;
        if (year, month) > self.end {
            self.next = None;
            return None;
        }
        self.next = Some(if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        });

        // The first of the month always exists, so the label render cannot fail
        let label = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_default();
        Some(MonthOption {
            value: format!("{:04}-{:02}", year, month),
            label,
        })
    }
}

/// Month options from `start`'s month through `today`'s month inclusive
///
/// The sentinel `all` entry always comes first, even when the range
/// itself is empty (start after today). Pure function of its inputs.
pub fn months_covering_range(start: NaiveDate, today: NaiveDate) -> MonthRange {
    MonthRange {
        sentinel_pending: true,
        next: Some((start.year(), start.month())),
        end: (today.year(), today.month()),
    }
}
