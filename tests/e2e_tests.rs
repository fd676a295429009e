//! End-to-end integration tests
//!
//! These tests validate the complete flows through the public API:
//! register, login, statement import, dashboard and charges views, and
//! profile updates. Where persistence matters they run over the
//! on-disk JSON store and reopen the app between steps, the way
//! separate CLI invocations would.

use cardledger::core::{LedgerApp, MonthKey, ProfileUpdate, RegistrationForm};
use cardledger::import::read_csv_file;
use cardledger::store::{JsonFileStore, UserStore};
use cardledger::types::{CardStatus, LedgerError};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::path::Path;
use tempfile::tempdir;

const STATEMENT: &str = "\
Date,Business Name,Category,Amount
05/10/2024,Super Deal,Groceries,₪230.00
05/20/2024,City Gym,Sport,80
06/07/2024,Book Corner,Leisure,45.99
06/10/2024,Super Deal,Groceries,120.01";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn registration() -> RegistrationForm {
    RegistrationForm {
        email: "dana@example.com".to_string(),
        password: "Abcdefg1!".to_string(),
        birthdate: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        card_number: "1234 5678 9012 3456".to_string(),
        card_expiry: "12/30".to_string(),
    }
}

/// Open the app over the store file, as a fresh CLI invocation would
fn open_app(store_path: &Path) -> LedgerApp<UserStore<JsonFileStore>> {
    LedgerApp::open(UserStore::new(JsonFileStore::new(store_path)))
        .expect("Failed to open the ledger store")
}

#[test]
fn test_full_flow_across_reopened_stores() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("ledger.json");

    // Register
    let mut app = open_app(&store_path);
    app.register(&registration(), today()).unwrap();
    assert_eq!(app.session(), None);

    // Login in a fresh "process"
    let mut app = open_app(&store_path);
    app.login("dana@example.com", "Abcdefg1!").unwrap();

    // Import in another one; the session was persisted by login
    let mut app = open_app(&store_path);
    assert_eq!(app.session(), Some("dana@example.com"));
    assert_eq!(app.import_transactions(STATEMENT).unwrap(), 4);

    // Dashboard: billing day 1, today 2024-06-15
    // last statement covers [05/01, 06/01), upcoming covers [06/01, ...)
    let app = open_app(&store_path);
    let summary = app.dashboard(today()).unwrap();
    assert_eq!(summary.card_last_four, "3456");
    assert_eq!(summary.last_statement_total, dec!(310.00));
    assert_eq!(summary.upcoming_total, dec!(166.00));

    // Charges, filtered and unfiltered
    let all = app.charges(&MonthKey::All).unwrap();
    assert_eq!(all.transactions.len(), 4);
    assert_eq!(all.total_expenses, dec!(476.00));
    assert_eq!(
        all.monthly_totals,
        vec![
            ("May 2024".to_string(), dec!(310.00)),
            ("Jun 2024".to_string(), dec!(166.00)),
        ]
    );

    let june = app.charges(&"2024-06".parse().unwrap()).unwrap();
    assert_eq!(june.transactions.len(), 2);
    assert_eq!(
        june.category_totals,
        vec![
            ("Leisure".to_string(), dec!(45.99)),
            ("Groceries".to_string(), dec!(120.01)),
        ]
    );

    // Logout survives into the next invocation
    let mut app = open_app(&store_path);
    app.logout().unwrap();
    let app = open_app(&store_path);
    assert_eq!(app.session(), None);
}

#[test]
fn test_rejected_statement_leaves_store_untouched() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("ledger.json");

    let mut app = open_app(&store_path);
    app.register(&registration(), today()).unwrap();
    app.login("dana@example.com", "Abcdefg1!").unwrap();
    app.import_transactions(STATEMENT).unwrap();

    // Second statement fails on its last row
    let broken = "Date,Business Name,Category,Amount\n\
                  06/20/2024,Cafe,Food,10\n\
                  06/21/2024,Cafe,Food,not-a-number";
    let mut app = open_app(&store_path);
    assert_eq!(
        app.import_transactions(broken),
        Err(LedgerError::invalid_amount(3, "not-a-number"))
    );

    // Nothing from the broken statement was appended
    let app = open_app(&store_path);
    let view = app.charges(&MonthKey::All).unwrap();
    assert_eq!(view.transactions.len(), 4);
}

#[test]
fn test_locked_card_blocks_import_until_reactivated() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("ledger.json");

    let mut app = open_app(&store_path);
    app.register(&registration(), today()).unwrap();
    app.login("dana@example.com", "Abcdefg1!").unwrap();

    let lock = ProfileUpdate {
        card_status: Some(CardStatus::Locked),
        ..ProfileUpdate::default()
    };
    app.update_profile(&lock, today()).unwrap();

    let mut app = open_app(&store_path);
    assert_eq!(
        app.import_transactions(STATEMENT),
        Err(LedgerError::card_locked("dana@example.com"))
    );
    assert_eq!(app.dashboard(today()).unwrap().card_status, CardStatus::Locked);

    let unlock = ProfileUpdate {
        card_status: Some(CardStatus::Active),
        ..ProfileUpdate::default()
    };
    app.update_profile(&unlock, today()).unwrap();
    assert_eq!(app.import_transactions(STATEMENT).unwrap(), 4);
}

#[test]
fn test_profile_updates_survive_reopening() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("ledger.json");

    let mut app = open_app(&store_path);
    app.register(&registration(), today()).unwrap();
    app.login("dana@example.com", "Abcdefg1!").unwrap();

    let update = ProfileUpdate {
        email: Some("dana@new.example.com".to_string()),
        password: Some("Newpass1?".to_string()),
        billing_day: Some("12".to_string()),
        ..ProfileUpdate::default()
    };
    app.update_profile(&update, today()).unwrap();

    // The renamed account is still the logged-in one after a restart
    let app = open_app(&store_path);
    assert_eq!(app.session(), Some("dana@new.example.com"));
    let summary = app.dashboard(today()).unwrap();
    assert_eq!(summary.email, "dana@new.example.com");
    assert_eq!(summary.billing_date, 12);

    // Only the new credentials work
    let mut app = open_app(&store_path);
    app.logout().unwrap();
    assert_eq!(
        app.login("dana@example.com", "Abcdefg1!"),
        Err(LedgerError::InvalidCredentials)
    );
    app.login("dana@new.example.com", "Newpass1?").unwrap();
}

#[test]
fn test_stored_user_round_trips_through_the_document() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("ledger.json");

    let mut app = open_app(&store_path);
    app.register(&registration(), today()).unwrap();
    app.login("dana@example.com", "Abcdefg1!").unwrap();
    app.import_transactions(STATEMENT).unwrap();

    // A completely fresh store rehydrates the same typed values
    let reopened = open_app(&store_path);
    let summary = reopened.dashboard(today()).unwrap();
    assert_eq!(summary.email, "dana@example.com");
    assert_eq!(summary.billing_date, 1);
    assert_eq!(summary.card_status, CardStatus::Active);
    assert_eq!(summary.card_last_four, "3456");

    let view = reopened.charges(&MonthKey::All).unwrap();
    assert_eq!(view.transactions, app.charges(&MonthKey::All).unwrap().transactions);
}

#[tokio::test]
async fn test_import_via_file_reader() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("ledger.json");
    let statement_path = dir.path().join("statement.csv");
    std::fs::write(&statement_path, STATEMENT).unwrap();

    let mut app = open_app(&store_path);
    app.register(&registration(), today()).unwrap();
    app.login("dana@example.com", "Abcdefg1!").unwrap();

    let text = read_csv_file(&statement_path).await.unwrap();
    assert_eq!(app.import_transactions(&text).unwrap(), 4);
}

#[test]
fn test_two_users_keep_separate_ledgers() {
    let dir = tempdir().unwrap();
    let store_path = dir.path().join("ledger.json");

    let mut app = open_app(&store_path);
    app.register(&registration(), today()).unwrap();

    let mut second = registration();
    second.email = "noa@example.com".to_string();
    app.register(&second, today()).unwrap();

    app.login("dana@example.com", "Abcdefg1!").unwrap();
    app.import_transactions(STATEMENT).unwrap();

    // The second user sees an empty ledger
    let mut app = open_app(&store_path);
    app.login("noa@example.com", "Abcdefg1!").unwrap();
    let view = app.charges(&MonthKey::All).unwrap();
    assert!(view.transactions.is_empty());

    // And the first user's data is still there
    let mut app = open_app(&store_path);
    app.login("dana@example.com", "Abcdefg1!").unwrap();
    assert_eq!(app.charges(&MonthKey::All).unwrap().transactions.len(), 4);
}
