//! CSV statement parser and validator
//!
//! Pure, synchronous parsing of raw CSV text into [`Transaction`]
//! records. No I/O happens here; file reading lives in
//! [`crate::import::reader`].
//!
//! # Schema
//!
//! The header row must declare the four required columns `Date`,
//! `Business Name`, `Category` and `Amount`, in any order. Undeclared
//! columns are allowed and passed through opaquely. Every data row must
//! match the header's field count exactly.
//!
//! # Validation
//!
//! Fields are validated per declared header, in declared order:
//! - `Amount` must parse as a decimal number once an optional `₪`
//!   glyph is stripped; the cleaned string is what gets stored.
//! - `Date` must be `MM/DD/YYYY` with month 01-12 and day 01-31.
//!   Days-in-month correctness is deliberately not checked here.
//! - Everything else is trimmed text.
//!
//! # Atomicity
//!
//! The first failure aborts the whole parse. Callers never see partial
//! results, so a rejected statement can never be half-imported.
//!
//! # Line numbers
//!
//! Errors cite 1-based line numbers over the retained (non-blank)
//! lines, with the header counted as line 1; the first data row is
//! line 2.

use crate::types::{LedgerError, Transaction};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Columns every statement must declare, in reporting order
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Business Name", "Category", "Amount"];

/// Currency glyph stripped from amount cells before numeric validation
const CURRENCY_GLYPH: char = '₪';

/// Parse raw CSV text into an ordered sequence of transactions
///
/// Returns one [`Transaction`] per non-blank data line, in source
/// order, or the first error encountered. See the module docs for the
/// schema and atomicity rules.
///
/// # Errors
///
/// * [`LedgerError::EmptyInput`] - no non-blank lines at all
/// * [`LedgerError::MissingColumns`] - required headers absent (all are named)
/// * [`LedgerError::RowArity`] - a row's field count differs from the header's
/// * [`LedgerError::InvalidAmount`] / [`LedgerError::InvalidDate`] - bad cell,
///   with line number and offending value
/// * [`LedgerError::Csv`] - the tokenizer rejected the input
pub fn parse_csv(text: &str) -> Result<Vec<Transaction>, LedgerError> {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(LedgerError::EmptyInput);
    }
    let joined = lines.join("\n");

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(joined.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();
    validate_structure(&headers)?;

    let mut transactions = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1, so the first data row is line 2
        let line = index + 2;

        if record.len() != headers.len() {
            return Err(LedgerError::row_arity(line, headers.len(), record.len()));
        }

        let mut transaction = Transaction::default();
        for (column, header) in headers.iter().enumerate() {
            let value = record.get(column).unwrap_or("").trim();

            match header.as_str() {
                "Amount" => transaction.amount = clean_amount(value, line)?,
                "Date" => {
                    if !is_valid_date(value) {
                        return Err(LedgerError::invalid_date(line, value));
                    }
                    transaction.date = value.to_string();
                }
                "Business Name" => transaction.business_name = value.to_string(),
                "Category" => transaction.category = value.to_string(),
                other => {
                    transaction.extra.insert(other.to_string(), value.to_string());
                }
            }
        }
        transactions.push(transaction);
    }

    Ok(transactions)
}

/// Check that every required column is declared, reporting all missing ones
fn validate_structure(headers: &[String]) -> Result<(), LedgerError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|header| header == *required))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LedgerError::missing_columns(missing))
    }
}

/// Strip the currency glyph and require the rest to be a decimal number
///
/// The returned string is the cleaned value; the raw cell is what a
/// failure reports.
fn clean_amount(value: &str, line: usize) -> Result<String, LedgerError> {
    let cleaned = value.replacen(CURRENCY_GLYPH, "", 1);
    let cleaned = cleaned.trim();

    if Decimal::from_str(cleaned).is_err() {
        return Err(LedgerError::invalid_amount(line, value));
    }
    Ok(cleaned.to_string())
}

/// Shape-check a date as `MM/DD/YYYY`
///
/// Month must be 01-12 and day 01-31; whether the day exists in that
/// month is not this validator's concern.
fn is_valid_date(value: &str) -> bool {
    let mut parts = value.split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if month.len() != 2 || day.len() != 2 || year.len() != 4 {
        return false;
    }
    if ![month, day, year]
        .iter()
        .all(|part| part.chars().all(|c| c.is_ascii_digit()))
    {
        return false;
    }

    let month: u32 = month.parse().unwrap_or(0);
    let day: u32 = day.parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}
