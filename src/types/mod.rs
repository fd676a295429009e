//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `card`: Credit card owned by a user
//! - `transaction`: Imported expense records
//! - `user`: Registered accounts and card status
//! - `error`: Error types for the card ledger

pub mod card;
pub mod error;
pub mod transaction;
pub mod user;

pub use card::CreditCard;
pub use error::LedgerError;
pub use transaction::Transaction;
pub use user::{password_digest, CardStatus, User};
