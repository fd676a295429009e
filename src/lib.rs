//! Card Ledger Library
//! # Overview
//!
//! This library manages credit-card user accounts with CSV statement
//! import and monthly/category expense summaries, persisted in a local
//! JSON key-value document.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (User, CreditCard, Transaction, errors)
//! - [`validate`] - Pure domain validators and input-mask formatters
//! - [`import`] - CSV statement parsing and async file reading
//! - [`core`] - Business logic components:
//!   - [`core::aggregate`] - Monthly, category and billing-period totals
//!   - [`core::months`] - Month keys and the month-selection range
//!   - [`core::app`] - The top-level controller and its flows
//! - [`store`] - Document stores and the user repository
//! - [`cli`] - CLI argument parsing
//!
//! # Flows
//!
//! Each flow of the original browser pages maps to one controller
//! operation:
//!
//! - **Register**: validate fields, store a new user with an active card
//! - **Login / Logout**: digest check, persisted current-user pointer
//! - **Import**: read a `.csv` file, parse it whole, append all rows or none
//! - **Dashboard**: card details plus the last/upcoming statement totals
//! - **Charges**: month-filtered transactions with per-month and
//!   per-category totals
//! - **Profile**: partial updates to credentials, card, billing day, status
//!
//! # Persistence
//!
//! One document key holds the JSON-serialized list of all users; a
//! second holds the current user's email. All repository operations are
//! synchronous, and every mutation rewrites the whole user list.

// Module declarations
pub mod cli;
pub mod core;
pub mod import;
pub mod store;
pub mod types;
pub mod validate;

pub use self::core::{
    ChargesView, DashboardSummary, LedgerApp, MonthKey, MonthOption, ProfileUpdate,
    RegistrationForm, UserRepository,
};
pub use import::{parse_csv, read_csv_file};
pub use store::{JsonFileStore, MemoryStore, UserStore};
pub use types::{CardStatus, CreditCard, LedgerError, Transaction, User};
