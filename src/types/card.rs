//! Credit card type
//!
//! A `CreditCard` is owned exclusively by a [`crate::types::User`]. The
//! card number is stored in canonical form (digits only); display
//! grouping is the job of [`crate::validate::card::format_card_number`].

use serde::{Deserialize, Serialize};

/// A user's credit card
///
/// Serialized camelCase and inlined into the owning user's document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    /// Card number, canonical 16-digit string
    pub number: String,

    /// Expiry date in `MM/YY` form
    pub expiry_date: String,
}

impl CreditCard {
    /// Create a card, stripping any grouping characters from the number
    ///
    /// Accepts the number as typed (`"1234 5678 9012 3456"` or
    /// `"1234-5678-..."`) and keeps only the digits. Validity of the
    /// digit count and expiry is the caller's concern, via
    /// [`crate::validate::card`].
    pub fn new(number: &str, expiry_date: &str) -> Self {
        CreditCard {
            number: number.chars().filter(|c| c.is_ascii_digit()).collect(),
            expiry_date: expiry_date.trim().to_string(),
        }
    }

    /// The last four digits of the card number, for display
    ///
    /// Returns the whole number if it is shorter than four digits.
    pub fn last_four_digits(&self) -> &str {
        let split = self.number.len().saturating_sub(4);
        &self.number[split..]
    }
}
