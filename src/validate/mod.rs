//! Domain validators
//!
//! Pure predicates and input-mask formatters consumed by registration,
//! profile updates and the CSV importer, grouped by topic:
//! - `user` - email, password, billing day and age checks
//! - `card` - card number and expiry checks, display formatters

pub mod card;
pub mod user;

pub use card::{
    format_card_number, format_expiry, validate_card_number, validate_expiry, validate_expiry_on,
};
pub use user::{
    is_at_least_16, is_at_least_16_on, validate_billing_day, validate_email, validate_password,
};
