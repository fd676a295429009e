//! Transaction record type
//!
//! A transaction is one parsed expense row from an imported CSV
//! statement. It is produced only by the CSV parser and appended to a
//! user's transaction list; it has no identity or lifecycle of its own.
//!
//! Both `date` and `amount` are kept as text in the imported form
//! (`MM/DD/YYYY` and a cleaned decimal string). Conversion to real
//! dates and numbers happens downstream in [`crate::core::aggregate`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parsed expense record
///
/// Serialized with the original statement's column names (`Date`,
/// `Business Name`, ...) so a persisted ledger document keeps the shape
/// of the CSV it was imported from. Columns beyond the required four are
/// passed through opaquely in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date as imported, `MM/DD/YYYY`
    #[serde(rename = "Date")]
    pub date: String,

    /// Merchant or payee name
    #[serde(rename = "Business Name")]
    pub business_name: String,

    /// Free-form expense category
    #[serde(rename = "Category")]
    pub category: String,

    /// Charged amount as a cleaned decimal string (currency glyph stripped)
    #[serde(rename = "Amount")]
    pub amount: String,

    /// Undeclared CSV columns, passed through without validation
    ///
    /// Ordered so serialization is deterministic.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Transaction {
    /// Create a transaction from the four required fields
    pub fn new(date: &str, business_name: &str, category: &str, amount: &str) -> Self {
        Transaction {
            date: date.to_string(),
            business_name: business_name.to_string(),
            category: category.to_string(),
            amount: amount.to_string(),
            extra: BTreeMap::new(),
        }
    }
}
