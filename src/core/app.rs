//! Application controller
//!
//! `LedgerApp` orchestrates the account flows: registration, login,
//! profile updates, statement import and the two summary views. It
//! owns the repository and an explicit session value (the logged-in
//! email) instead of any ambient global state, and delegates to the
//! pure validators and aggregation functions.
//!
//! Methods that depend on "today" take it as a parameter so every flow
//! stays a pure function of its inputs; the CLI passes the wall clock.

use crate::core::aggregate::{
    billing_period_totals, category_totals, filter_by_month, monthly_totals, total_expenses,
};
use crate::core::months::{
    months_covering_range, MonthKey, MonthRange, RANGE_START_MONTH, RANGE_START_YEAR,
};
use crate::core::traits::UserRepository;
use crate::import::parse_csv;
use crate::types::{password_digest, CardStatus, CreditCard, LedgerError, Transaction, User};
use crate::validate::{
    is_at_least_16_on, validate_billing_day, validate_card_number, validate_email,
    validate_expiry_on, validate_password,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Billing day a fresh registration starts with
pub const DEFAULT_BILLING_DAY: u8 = 1;

const EMAIL_RULE: &str = "must look like local@domain.tld";
const PASSWORD_RULE: &str =
    "must be at least 8 characters with an uppercase letter, a lowercase letter, a digit and exactly one special character";
const AGE_RULE: &str = "must be at least 16 years old";
const CARD_NUMBER_RULE: &str = "must contain exactly 16 digits";
const EXPIRY_RULE: &str = "must be MM/YY and lie in the future";
const BILLING_DAY_RULE: &str = "must be between 1 and 28";

/// Input of the registration flow
///
/// The card number may arrive grouped as typed (`"1234 5678 ..."`);
/// it is canonicalized on storage.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    /// Account email, unique across the ledger
    pub email: String,
    /// Clear-text password; digested before storage
    pub password: String,
    /// Date of birth
    pub birthdate: NaiveDate,
    /// Card number as typed
    pub card_number: String,
    /// Card expiry, `MM/YY`
    pub card_expiry: String,
}

/// Input of the profile-update flow
///
/// Every field is optional; absent fields keep their stored value.
/// Card number and expiry merge with the stored card when only one of
/// them is given.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New account email
    pub email: Option<String>,
    /// New clear-text password
    pub password: Option<String>,
    /// New card number
    pub card_number: Option<String>,
    /// New card expiry, `MM/YY`
    pub card_expiry: Option<String>,
    /// New billing day, still as form text
    pub billing_day: Option<String>,
    /// New card status
    pub card_status: Option<CardStatus>,
}

/// What the dashboard renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Account email
    pub email: String,
    /// Last four digits of the card number
    pub card_last_four: String,
    /// Card expiry, `MM/YY`
    pub card_expiry: String,
    /// Whether the card is active or locked
    pub card_status: CardStatus,
    /// Billing day of month
    pub billing_date: u8,
    /// Total of the closed statement period
    pub last_statement_total: Decimal,
    /// Running total of the open statement period
    pub upcoming_total: Decimal,
}

/// What the charges view renders for one month selection
#[derive(Debug, Clone, PartialEq)]
pub struct ChargesView {
    /// The transactions matching the month filter, in import order
    pub transactions: Vec<Transaction>,
    /// Per-month totals over the filtered set
    pub monthly_totals: Vec<(String, Decimal)>,
    /// Per-category totals over the filtered set
    pub category_totals: Vec<(String, Decimal)>,
    /// Grand total over the filtered set
    pub total_expenses: Decimal,
}

/// The top-level ledger controller
///
/// Generic over the repository so the CLI runs on a JSON file store
/// and tests run in memory.
pub struct LedgerApp<R: UserRepository> {
    repository: R,
    session: Option<String>,
}

impl<R: UserRepository> LedgerApp<R> {
    /// Open the app over a repository, resuming any persisted session
    pub fn open(repository: R) -> Result<Self, LedgerError> {
        let session = repository.current_user()?.map(|user| user.email);
        Ok(LedgerApp {
            repository,
            session,
        })
    }

    /// Email of the logged-in user, if any
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// The logged-in user's stored record
    fn require_user(&self) -> Result<User, LedgerError> {
        let email = self.session.as_ref().ok_or(LedgerError::NotLoggedIn)?;
        self.repository
            .find_user_by_email(email)?
            .ok_or_else(|| LedgerError::user_not_found(email))
    }

    /// Register a new account
    ///
    /// Validates every field, then stores the user with a digested
    /// password, a canonical card number, the default billing day, no
    /// transactions and an active card. Does not log the user in.
    pub fn register(
        &mut self,
        form: &RegistrationForm,
        today: NaiveDate,
    ) -> Result<(), LedgerError> {
        if !validate_email(&form.email) {
            return Err(LedgerError::validation_failed("email", EMAIL_RULE));
        }
        if !validate_password(&form.password) {
            return Err(LedgerError::validation_failed("password", PASSWORD_RULE));
        }
        if !is_at_least_16_on(form.birthdate, today) {
            return Err(LedgerError::validation_failed("birthdate", AGE_RULE));
        }
        if !validate_card_number(&form.card_number) {
            return Err(LedgerError::validation_failed(
                "card number",
                CARD_NUMBER_RULE,
            ));
        }
        if !validate_expiry_on(&form.card_expiry, today) {
            return Err(LedgerError::validation_failed("card expiry", EXPIRY_RULE));
        }

        let user = User::new(
            &form.email,
            &form.password,
            form.birthdate,
            CreditCard::new(&form.card_number, &form.card_expiry),
            DEFAULT_BILLING_DAY,
        );
        // Email uniqueness is the repository's invariant
        self.repository.add_user(user)
    }

    /// Log in with email and password
    ///
    /// On success the current-user pointer is persisted and the
    /// session set. Failure never reveals which credential was wrong.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), LedgerError> {
        match self.repository.find_user_by_email(email)? {
            Some(user) if user.verify_password(password) => {
                self.repository.set_current_user(email)?;
                self.session = Some(email.to_string());
                Ok(())
            }
            _ => Err(LedgerError::InvalidCredentials),
        }
    }

    /// Log out, clearing both the persisted pointer and the session
    pub fn logout(&mut self) -> Result<(), LedgerError> {
        self.repository.logout()?;
        self.session = None;
        Ok(())
    }

    /// Import a CSV statement for the logged-in user
    ///
    /// All-or-nothing: the whole text is parsed before anything is
    /// stored, so a rejected statement leaves the transaction list
    /// untouched. Returns how many transactions were appended.
    ///
    /// # Errors
    ///
    /// [`LedgerError::NotLoggedIn`] without a session,
    /// [`LedgerError::CardLocked`] for a locked card, and any parse
    /// error from [`parse_csv`].
    pub fn import_transactions(&mut self, text: &str) -> Result<usize, LedgerError> {
        let mut user = self.require_user()?;
        if user.card_status == CardStatus::Locked {
            return Err(LedgerError::card_locked(&user.email));
        }

        let transactions = parse_csv(text)?;
        let count = transactions.len();
        user.transactions.extend(transactions);

        let email = user.email.clone();
        self.repository.replace_user(&email, user)?;
        Ok(count)
    }

    /// The dashboard summary for the logged-in user
    pub fn dashboard(&self, today: NaiveDate) -> Result<DashboardSummary, LedgerError> {
        let user = self.require_user()?;
        let periods = billing_period_totals(&user.transactions, user.billing_date, today)?;

        Ok(DashboardSummary {
            email: user.email.clone(),
            card_last_four: user.credit_card.last_four_digits().to_string(),
            card_expiry: user.credit_card.expiry_date.clone(),
            card_status: user.card_status,
            billing_date: user.billing_date,
            last_statement_total: periods.last_statement,
            upcoming_total: periods.upcoming,
        })
    }

    /// The charges view for one month selection
    pub fn charges(&self, key: &MonthKey) -> Result<ChargesView, LedgerError> {
        let user = self.require_user()?;
        let transactions = filter_by_month(&user.transactions, key);

        Ok(ChargesView {
            monthly_totals: monthly_totals(&transactions)?,
            category_totals: category_totals(&transactions)?,
            total_expenses: total_expenses(&transactions)?,
            transactions,
        })
    }

    /// The month-selection options up to `today`
    pub fn month_options(&self, today: NaiveDate) -> MonthRange {
        // The range start is fixed; from_ymd_opt cannot fail on day 1
        let start = NaiveDate::from_ymd_opt(RANGE_START_YEAR, RANGE_START_MONTH, 1)
            .unwrap_or(today);
        months_covering_range(start, today)
    }

    /// Update the logged-in user's profile
    ///
    /// Only the given fields change. An email change re-points the
    /// persisted current-user pointer and the session at the new
    /// address.
    pub fn update_profile(
        &mut self,
        update: &ProfileUpdate,
        today: NaiveDate,
    ) -> Result<(), LedgerError> {
        let mut user = self.require_user()?;
        let old_email = user.email.clone();

        if let Some(email) = &update.email {
            if *email != old_email {
                if !validate_email(email) {
                    return Err(LedgerError::validation_failed("email", EMAIL_RULE));
                }
                if self.repository.find_user_by_email(email)?.is_some() {
                    return Err(LedgerError::duplicate_email(email));
                }
                user.email = email.clone();
            }
        }

        if let Some(password) = &update.password {
            if !validate_password(password) {
                return Err(LedgerError::validation_failed("password", PASSWORD_RULE));
            }
            user.password = password_digest(password);
        }

        if update.card_number.is_some() || update.card_expiry.is_some() {
            if let Some(number) = &update.card_number {
                if !validate_card_number(number) {
                    return Err(LedgerError::validation_failed(
                        "card number",
                        CARD_NUMBER_RULE,
                    ));
                }
            }
            if let Some(expiry) = &update.card_expiry {
                if !validate_expiry_on(expiry, today) {
                    return Err(LedgerError::validation_failed("card expiry", EXPIRY_RULE));
                }
            }

            // Merge with the stored card when only one part is given
            let number = update
                .card_number
                .clone()
                .unwrap_or_else(|| user.credit_card.number.clone());
            let expiry = update
                .card_expiry
                .clone()
                .unwrap_or_else(|| user.credit_card.expiry_date.clone());
            user.credit_card = CreditCard::new(&number, &expiry);
        }

        if let Some(day) = &update.billing_day {
            match day.trim().parse::<u8>() {
                Ok(parsed) if validate_billing_day(day) => user.billing_date = parsed,
                _ => {
                    return Err(LedgerError::validation_failed(
                        "billing day",
                        BILLING_DAY_RULE,
                    ))
                }
            }
        }

        if let Some(status) = update.card_status {
            user.card_status = status;
        }

        let new_email = user.email.clone();
        self.repository.replace_user(&old_email, user)?;

        if new_email != old_email {
            self.repository.set_current_user(&new_email)?;
            self.session = Some(new_email);
        }
        Ok(())
    }
}
