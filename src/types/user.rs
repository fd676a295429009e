//! User account type
//!
//! A `User` is a registered account: credentials, a credit card, a
//! billing day and an append-only transaction history. Users are
//! created at registration, mutated by profile updates and imports,
//! and never deleted.
//!
//! Passwords are stored as SHA-256 hex digests, never in clear text;
//! see `DESIGN.md` for the compatibility trade-off.

use crate::types::{CreditCard, Transaction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Whether the user's card accepts new activity
///
/// A locked card blocks transaction import; the dashboard still renders
/// with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    /// Card is usable
    Active,
    /// Card is blocked for imports
    Locked,
}

/// A registered account
///
/// Identified by `email`, matched case-sensitively. Serialized
/// camelCase with the credit card inlined as a nested object and the
/// transactions as a nested list, mirroring the original document
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account identifier
    pub email: String,

    /// SHA-256 hex digest of the password
    pub password: String,

    /// Date of birth; registration requires age >= 16
    pub birthdate: NaiveDate,

    /// The card this account manages
    pub credit_card: CreditCard,

    /// Day of month (1-28) that opens a statement period
    pub billing_date: u8,

    /// Imported expense history, append-only
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Whether the card is active or locked
    pub card_status: CardStatus,
}

impl User {
    /// Create a freshly registered user
    ///
    /// The password is digested here; the account starts with no
    /// transactions and an active card.
    pub fn new(
        email: &str,
        password: &str,
        birthdate: NaiveDate,
        credit_card: CreditCard,
        billing_date: u8,
    ) -> Self {
        User {
            email: email.to_string(),
            password: password_digest(password),
            birthdate,
            credit_card,
            billing_date,
            transactions: Vec::new(),
            card_status: CardStatus::Active,
        }
    }

    /// Check a clear-text password candidate against the stored digest
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == password_digest(candidate)
    }
}

/// SHA-256 hex digest of a clear-text password
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "dana@example.com",
            "Abcdefg1!",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            CreditCard::new("1234 5678 9012 3456", "12/30"),
            5,
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert!(user.transactions.is_empty());
        assert_eq!(user.card_status, CardStatus::Active);
        assert_eq!(user.billing_date, 5);
    }

    #[test]
    fn test_password_is_digested_not_stored() {
        let user = sample_user();
        assert_ne!(user.password, "Abcdefg1!");
        assert!(user.verify_password("Abcdefg1!"));
        assert!(!user.verify_password("Abcdefg1?"));
    }

    #[test]
    fn test_card_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CardStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&CardStatus::Locked).unwrap(),
            "\"locked\""
        );
    }

    #[test]
    fn test_user_document_shape() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["email"], "dana@example.com");
        assert_eq!(json["birthdate"], "1990-04-12");
        assert_eq!(json["billingDate"], 5);
        assert_eq!(json["cardStatus"], "active");
        assert_eq!(json["creditCard"]["expiryDate"], "12/30");
        assert!(json["transactions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_user_round_trip() {
        let mut user = sample_user();
        user.transactions
            .push(Transaction::new("01/15/2024", "Cafe", "Food", "42.00"));

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back.email, user.email);
        assert_eq!(back.billing_date, user.billing_date);
        assert_eq!(back.card_status, user.card_status);
        assert_eq!(
            back.credit_card.last_four_digits(),
            user.credit_card.last_four_digits()
        );
        assert_eq!(back.transactions, user.transactions);
    }
}
