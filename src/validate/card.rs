//! Credit-card validators and input-mask formatters
//!
//! The validators are total predicates; the formatters reshape input
//! for display and never reject anything. The expiry check comes in a
//! clocked variant (`_on`) for testability and a wall-clock wrapper.

use chrono::{Local, NaiveDate};

/// Check that a card number has exactly 16 digits once grouping
/// characters are stripped
pub fn validate_card_number(number: &str) -> bool {
    number.chars().filter(|c| c.is_ascii_digit()).count() == 16
}

/// Parse an `MM/YY` expiry into (month, full year)
///
/// Accepts exactly five characters with a 01-12 month; `YY` is read as
/// `2000 + YY`.
fn parse_expiry(expiry: &str) -> Option<(u32, i32)> {
    let (month, year) = expiry.split_once('/')?;
    if month.len() != 2 || year.len() != 2 {
        return None;
    }
    if !month.chars().all(|c| c.is_ascii_digit()) || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    let year: i32 = 2000 + year.parse::<i32>().ok()?;
    Some((month, year))
}

/// Check an `MM/YY` expiry against an explicit "today"
///
/// True iff the first instant of the expiry month lies strictly after
/// `today`. A card expiring this month is already invalid.
pub fn validate_expiry_on(expiry: &str, today: NaiveDate) -> bool {
    match parse_expiry(expiry.trim()) {
        Some((month, year)) => {
            NaiveDate::from_ymd_opt(year, month, 1).is_some_and(|first| first > today)
        }
        None => false,
    }
}

/// Check an `MM/YY` expiry against the local wall clock
pub fn validate_expiry(expiry: &str) -> bool {
    validate_expiry_on(expiry, Local::now().date_naive())
}

/// Regroup a card number into blocks of four digits
///
/// Strips everything but digits and inserts a single space after each
/// complete block of four that is followed by more digits. Input is
/// only reshaped, never rejected.
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(*digit);
    }
    formatted
}

/// Reshape expiry input into `MM/YY` while typing
///
/// Keeps at most four digits and inserts the `/` once a third digit
/// exists. Input is only reshaped, never rejected.
pub fn format_expiry(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::spaced("1234 5678 9012 3456", true)]
    #[case::plain("1234567890123456", true)]
    #[case::dashed("1234-5678-9012-3456", true)]
    #[case::fifteen_digits("1234-5678-9012-345", false)]
    #[case::seventeen_digits("12345678901234567", false)]
    #[case::letters("1234 5678 9012 345a", false)]
    #[case::empty("", false)]
    fn test_validate_card_number(#[case] number: &str, #[case] expected: bool) {
        assert_eq!(validate_card_number(number), expected);
    }

    #[rstest]
    // today fixed at 2024-06-15
    #[case::next_month("07/24", true)]
    #[case::current_month("06/24", false)]
    #[case::last_month("05/24", false)]
    #[case::next_year("01/25", true)]
    #[case::far_future("12/39", true)]
    #[case::month_zero("00/30", false)]
    #[case::month_thirteen("13/30", false)]
    #[case::one_digit_month("7/30", false)]
    #[case::no_slash("0730", false)]
    #[case::garbage("ab/cd", false)]
    #[case::empty("", false)]
    fn test_validate_expiry_on(#[case] expiry: &str, #[case] expected: bool) {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(validate_expiry_on(expiry, today), expected);
    }

    #[rstest]
    #[case::full("1234567890123456", "1234 5678 9012 3456")]
    #[case::already_grouped("1234 5678 9012 3456", "1234 5678 9012 3456")]
    #[case::partial("12345", "1234 5")]
    #[case::exactly_four("1234", "1234")]
    #[case::mixed_noise("12ab34-56", "1234 56")]
    #[case::empty("", "")]
    fn test_format_card_number(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_card_number(input), expected);
    }

    #[rstest]
    #[case::two_digits("12", "12")]
    #[case::three_digits("123", "12/3")]
    #[case::four_digits("1230", "12/30")]
    #[case::overflow_truncated("12305", "12/30")]
    #[case::already_masked("12/30", "12/30")]
    #[case::empty("", "")]
    fn test_format_expiry(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_expiry(input), expected);
    }
}
