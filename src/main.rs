//! Card Ledger CLI
//!
//! Command-line interface for the card ledger: account registration,
//! login, CSV statement import and expense summaries over a local JSON
//! store.
//!
//! # Usage
//!
//! ```bash
//! cardledger register --email dana@example.com --password 'Abcdefg1!' \
//!     --birthdate 1990-04-12 --card-number '1234 5678 9012 3456' --card-expiry 12/30
//! cardledger login --email dana@example.com --password 'Abcdefg1!'
//! cardledger import statement.csv
//! cardledger dashboard
//! cardledger charges --month 2024-02
//! cardledger profile --billing-day 12
//! ```
//!
//! The store path defaults to `cardledger.json` in the working
//! directory and can be overridden with `--store`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (validation failure, rejected statement, storage failure, etc.)

use cardledger::cli::{self, CliArgs, Command};
use cardledger::core::{ChargesView, DashboardSummary, LedgerApp};
use cardledger::import::read_csv_file;
use cardledger::store::{JsonFileStore, UserStore};
use cardledger::types::{CardStatus, LedgerError};
use cardledger::validate::{format_card_number, format_expiry};
use chrono::Local;
use rust_decimal::Decimal;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(error) = run(args) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<(), LedgerError> {
    let repository = UserStore::new(JsonFileStore::new(&args.store));
    let mut app = LedgerApp::open(repository)?;
    let today = Local::now().date_naive();

    match args.command {
        Command::Register {
            email,
            password,
            birthdate,
            card_number,
            card_expiry,
        } => {
            // Reshape card input the way the original form masks did,
            // so '1230' and '12/30' both arrive as MM/YY
            let form = cardledger::core::RegistrationForm {
                email,
                password,
                birthdate,
                card_number: format_card_number(&card_number),
                card_expiry: format_expiry(&card_expiry),
            };
            app.register(&form, today)?;
            println!("Registered {}. You can now log in.", form.email);
        }

        Command::Login { email, password } => {
            app.login(&email, &password)?;
            println!("Logged in as {}.", email);
        }

        Command::Logout => {
            app.logout()?;
            println!("Logged out.");
        }

        Command::Import { file } => {
            // The file read is the only async step; drive it on a
            // current-thread runtime and hand the text to the pure parser
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let text = runtime.block_on(read_csv_file(&file))?;

            let count = app.import_transactions(&text)?;
            println!("Imported {} transactions from {}.", count, file.display());
        }

        Command::Dashboard => {
            let summary = app.dashboard(today)?;
            print_dashboard(&summary);
        }

        Command::Charges { month } => {
            let view = app.charges(&month)?;
            print_charges(&view);
        }

        Command::Months => {
            for option in app.month_options(today) {
                println!("{:<9}{}", option.value, option.label);
            }
        }

        Command::Profile {
            email,
            password,
            card_number,
            card_expiry,
            billing_day,
            card_status,
        } => {
            let update = cardledger::core::ProfileUpdate {
                email,
                password,
                card_number: card_number.as_deref().map(format_card_number),
                card_expiry: card_expiry.as_deref().map(format_expiry),
                billing_day,
                card_status: card_status.map(Into::into),
            };
            app.update_profile(&update, today)?;
            println!("Profile updated.");
        }
    }

    Ok(())
}

fn print_dashboard(summary: &DashboardSummary) {
    println!("Account:        {}", summary.email);
    println!(
        "Card:           **** **** **** {} (expires {})",
        summary.card_last_four, summary.card_expiry
    );
    println!("Billing day:    {}", summary.billing_date);
    println!(
        "Last statement: {}",
        format_currency(summary.last_statement_total)
    );
    println!(
        "Upcoming:       {}",
        format_currency(summary.upcoming_total)
    );

    if summary.card_status == CardStatus::Locked {
        eprintln!("Warning: your card is locked. Imports are blocked until it is reactivated.");
    }
}

fn print_charges(view: &ChargesView) {
    if view.transactions.is_empty() {
        println!("No transactions for this period");
        return;
    }

    println!("{:<12}{:<28}{:<16}{:>10}", "Date", "Business", "Category", "Amount");
    for transaction in &view.transactions {
        println!(
            "{:<12}{:<28}{:<16}{:>10}",
            transaction.date,
            transaction.business_name,
            transaction.category,
            transaction.amount
        );
    }

    println!("\nBy month:");
    for (label, total) in &view.monthly_totals {
        println!("  {:<10}{}", label, format_currency(*total));
    }

    println!("\nBy category:");
    for (category, total) in &view.category_totals {
        println!("  {:<16}{}", category, format_currency(*total));
    }

    println!("\nTotal expenses: {}", format_currency(view.total_expenses));
}

fn format_currency(amount: Decimal) -> String {
    format!("\u{20aa}{:.2}", amount)
}
