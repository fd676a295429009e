//! Error types for the card ledger
//!
//! This module defines all error types that can occur during CSV import,
//! aggregation, account management, and persistence.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **CSV Import Errors**: empty input, missing columns, row arity, bad fields
//! - **Aggregation Errors**: stored dates or amounts that no longer parse
//! - **Account Errors**: duplicate email, unknown user, locked card, bad credentials
//! - **Storage Errors**: the document store is unreadable or unwritable

use thiserror::Error;

/// Main error type for the card ledger
///
/// This enum represents all possible errors that can occur while importing
/// transactions, aggregating them, or managing user records. Each variant
/// includes relevant context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// CSV input contained no non-blank lines
    ///
    /// This is a fatal import error; there is nothing to parse.
    #[error("empty CSV input: no non-blank lines")]
    EmptyInput,

    /// One or more required CSV columns are absent from the header row
    ///
    /// Every missing column is reported, not just the first.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// All required column names absent from the header
        columns: Vec<String>,
    },

    /// A data row does not have the same number of fields as the header
    ///
    /// The whole import is rejected; no rows are kept.
    #[error("invalid data in line {line}: expected {expected} values but got {actual}")]
    RowArity {
        /// 1-based line number over the retained lines, header counted as line 1
        line: usize,
        /// Field count declared by the header
        expected: usize,
        /// Field count found in the offending row
        actual: usize,
    },

    /// An amount field does not parse as a decimal number
    ///
    /// Carries the source line during import; aggregation over stored
    /// data reports the same error without a line.
    #[error("invalid amount{}: '{value}'", line.map(|l| format!(" in line {}", l)).unwrap_or_default())]
    InvalidAmount {
        /// Source line number, if the failure occurred during import
        line: Option<usize>,
        /// The offending raw value
        value: String,
    },

    /// A date field is not a valid MM/DD/YYYY date
    ///
    /// Carries the source line during import; aggregation over stored
    /// data reports the same error without a line.
    #[error("invalid date{}: '{value}'", line.map(|l| format!(" in line {}", l)).unwrap_or_default())]
    InvalidDate {
        /// Source line number, if the failure occurred during import
        line: Option<usize>,
        /// The offending raw value
        value: String,
    },

    /// The CSV tokenizer itself rejected the input
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the tokenizer error
        message: String,
    },

    /// Registration or profile update targets an email that already exists
    #[error("email '{email}' is already registered")]
    DuplicateEmail {
        /// The email that was already present
        email: String,
    },

    /// No stored user matches the given email
    #[error("no user found for email '{email}'")]
    UserNotFound {
        /// The email that failed to resolve
        email: String,
    },

    /// An operation that needs a logged-in user was called without one
    #[error("no user is logged in")]
    NotLoggedIn,

    /// The current user's card is locked, which blocks transaction import
    #[error("card for '{email}' is locked")]
    CardLocked {
        /// Email of the user whose card is locked
        email: String,
    },

    /// Login failed
    ///
    /// Deliberately does not reveal whether the email or the password
    /// was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// A registration or profile field failed validation
    #[error("invalid {field}: {message}")]
    ValidationFailed {
        /// The field that failed (e.g. "password", "card number")
        field: String,
        /// Human-readable requirement that was not met
        message: String,
    },

    /// The import file is not a CSV file
    #[error("unsupported file '{path}': expected a .csv file")]
    UnsupportedFile {
        /// The rejected path
        path: String,
    },

    /// The document store could not be read or written
    ///
    /// Persistence failures are logged at the store and re-raised as
    /// this variant; the caller owns user-visible messaging.
    #[error("storage unavailable: {message}")]
    StorageUnavailable {
        /// Description of the underlying storage failure
        message: String,
    },

    /// I/O error occurred while reading an import file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        LedgerError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a MissingColumns error
    pub fn missing_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LedgerError::MissingColumns {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a RowArity error
    pub fn row_arity(line: usize, expected: usize, actual: usize) -> Self {
        LedgerError::RowArity {
            line,
            expected,
            actual,
        }
    }

    /// Create an InvalidAmount error for an import line
    pub fn invalid_amount(line: usize, value: &str) -> Self {
        LedgerError::InvalidAmount {
            line: Some(line),
            value: value.to_string(),
        }
    }

    /// Create an InvalidAmount error for stored data (no line number)
    pub fn unparsable_amount(value: &str) -> Self {
        LedgerError::InvalidAmount {
            line: None,
            value: value.to_string(),
        }
    }

    /// Create an InvalidDate error for an import line
    pub fn invalid_date(line: usize, value: &str) -> Self {
        LedgerError::InvalidDate {
            line: Some(line),
            value: value.to_string(),
        }
    }

    /// Create an InvalidDate error for stored data (no line number)
    pub fn unparsable_date(value: &str) -> Self {
        LedgerError::InvalidDate {
            line: None,
            value: value.to_string(),
        }
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email(email: &str) -> Self {
        LedgerError::DuplicateEmail {
            email: email.to_string(),
        }
    }

    /// Create a UserNotFound error
    pub fn user_not_found(email: &str) -> Self {
        LedgerError::UserNotFound {
            email: email.to_string(),
        }
    }

    /// Create a CardLocked error
    pub fn card_locked(email: &str) -> Self {
        LedgerError::CardLocked {
            email: email.to_string(),
        }
    }

    /// Create a ValidationFailed error
    pub fn validation_failed(field: &str, message: &str) -> Self {
        LedgerError::ValidationFailed {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an UnsupportedFile error
    pub fn unsupported_file(path: &str) -> Self {
        LedgerError::UnsupportedFile {
            path: path.to_string(),
        }
    }

    /// Create a StorageUnavailable error
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        LedgerError::StorageUnavailable {
            message: message.into(),
        }
    }
}
