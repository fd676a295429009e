//! Expense aggregation over stored transactions
//!
//! Pure summaries consumed by the dashboard and charges views: totals
//! per month, per category, per billing period, and month filtering.
//!
//! Stored transactions keep `date` and `amount` as text (the importer's
//! output), so every function here parses them for real. The policy is
//! strict on every path: a stored value that no longer parses is
//! surfaced as an error, never coerced to zero. Data only enters the
//! store through the strict importer, so a failure here means the store
//! was corrupted behind our back.

use crate::core::months::MonthKey;
use crate::types::{LedgerError, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Sums of a user's two most recent statement periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPeriodTotals {
    /// Total charged in the closed statement period
    pub last_statement: Decimal,
    /// Total charged since the current period opened
    pub upcoming: Decimal,
}

/// Parse a stored `MM/DD/YYYY` date
///
/// Unlike the import-time shape check, this requires a real calendar
/// date, so `02/30/2024` fails here.
fn parse_stored_date(date: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(date, "%m/%d/%Y")
        .map_err(|_| LedgerError::unparsable_date(date))
}

/// Parse a stored amount string into a decimal
///
/// Drops every character that is not a digit, `.` or `-`, then
/// requires the rest to parse.
pub fn parse_stored_amount(amount: &str) -> Result<Decimal, LedgerError> {
    let cleaned: String = amount
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Decimal::from_str(&cleaned).map_err(|_| LedgerError::unparsable_amount(amount))
}

/// Total charged per calendar month
///
/// Groups are keyed by a `"Jan 2024"` style label and appear in
/// first-occurrence order, not chronological order; callers sort if
/// they need to.
pub fn monthly_totals(
    transactions: &[Transaction],
) -> Result<Vec<(String, Decimal)>, LedgerError> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for transaction in transactions {
        let label = parse_stored_date(&transaction.date)?
            .format("%b %Y")
            .to_string();
        let amount = parse_stored_amount(&transaction.amount)?;
        accumulate(&mut totals, label, amount);
    }
    Ok(totals)
}

/// Total charged per category
///
/// Groups are keyed by the exact category string, in first-occurrence
/// order.
pub fn category_totals(
    transactions: &[Transaction],
) -> Result<Vec<(String, Decimal)>, LedgerError> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for transaction in transactions {
        let amount = parse_stored_amount(&transaction.amount)?;
        accumulate(&mut totals, transaction.category.clone(), amount);
    }
    Ok(totals)
}

/// Sum of all transaction amounts
pub fn total_expenses(transactions: &[Transaction]) -> Result<Decimal, LedgerError> {
    let mut total = Decimal::ZERO;
    for transaction in transactions {
        total += parse_stored_amount(&transaction.amount)?;
    }
    Ok(total)
}

/// The subsequence of transactions falling in one month
///
/// [`MonthKey::All`] returns the full set unchanged. A transaction
/// whose date does not parse cannot fall in any month and is excluded
/// from single-month filters. The input is never mutated.
pub fn filter_by_month(transactions: &[Transaction], key: &MonthKey) -> Vec<Transaction> {
    match key {
        MonthKey::All => transactions.to_vec(),
        MonthKey::Month { .. } => transactions
            .iter()
            .filter(|transaction| {
                parse_stored_date(&transaction.date)
                    .map(|date| key.matches(date))
                    .unwrap_or(false)
            })
            .cloned()
            .collect(),
    }
}

/// Statement-period sums around the user's billing day
///
/// The current period opens on `billing_day` of `today`'s month; the
/// previous period opened on the same day one month earlier. Returns
/// the closed period's total (`[previous open, current open)`) and the
/// running total since the current open (`[current open, ∞)`).
/// `billing_day` is the stored 1-28 invariant, so both boundaries
/// exist in every month.
pub fn billing_period_totals(
    transactions: &[Transaction],
    billing_day: u8,
    today: NaiveDate,
) -> Result<BillingPeriodTotals, LedgerError> {
    use chrono::Datelike;

    let day_in = |year: i32, month: u32| {
        NaiveDate::from_ymd_opt(year, month, billing_day as u32).ok_or_else(|| {
            LedgerError::validation_failed("billing day", "must be between 1 and 28")
        })
    };

    let current_open = day_in(today.year(), today.month())?;
    let previous_open = if today.month() == 1 {
        day_in(today.year() - 1, 12)?
    } else {
        day_in(today.year(), today.month() - 1)?
    };

    let mut totals = BillingPeriodTotals {
        last_statement: Decimal::ZERO,
        upcoming: Decimal::ZERO,
    };
    for transaction in transactions {
        let date = parse_stored_date(&transaction.date)?;
        let amount = parse_stored_amount(&transaction.amount)?;

        if date >= current_open {
            totals.upcoming += amount;
        } else if date >= previous_open {
            totals.last_statement += amount;
        }
    }
    Ok(totals)
}

/// Fold an amount into a labelled running total, preserving
/// first-occurrence order
fn accumulate(totals: &mut Vec<(String, Decimal)>, label: String, amount: Decimal) {
    match totals.iter_mut().find(|(existing, _)| *existing == label) {
        Some((_, total)) => *total += amount,
        None => totals.push((label, amount)),
    }
}
