//! Account-field validators
//!
//! Pure predicates over registration and profile input. Each is total:
//! it never panics and never returns an error, only `bool`. The
//! age check comes in a clocked variant (`_on`) for testability and a
//! wall-clock wrapper.

use chrono::{Datelike, Local, NaiveDate};

/// Check that a string has a `local@domain.tld` shape
///
/// Requires: no whitespace, exactly one `@` separating a non-empty
/// local part from a domain that contains an interior dot with
/// non-empty text on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Interior dot: at least one character either side
    match domain.rfind('.') {
        Some(i) => i > 0 && i + 1 < domain.len(),
        None => false,
    }
}

/// Check password strength
///
/// True iff the password is at least 8 characters long and contains at
/// least one ASCII uppercase letter, one lowercase letter, one digit,
/// and **exactly one** character outside `[A-Za-z0-9]`.
pub fn validate_password(password: &str) -> bool {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let specials = password
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric())
        .count();

    password.chars().count() >= 8 && has_upper && has_lower && has_digit && specials == 1
}

/// Check that a billing-day string parses as an integer in [1, 28]
pub fn validate_billing_day(day: &str) -> bool {
    day.trim()
        .parse::<u8>()
        .is_ok_and(|d| (1..=28).contains(&d))
}

/// Whole-year age check against an explicit "today"
///
/// Age is counted in completed years: if the birthday has not yet
/// occurred in `today`'s year, one year is subtracted.
pub fn is_at_least_16_on(birthdate: NaiveDate, today: NaiveDate) -> bool {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age >= 16
}

/// Whole-year age check against the local wall clock
pub fn is_at_least_16(birthdate: NaiveDate) -> bool {
    is_at_least_16_on(birthdate, Local::now().date_naive())
}
