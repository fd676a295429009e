//! Command-line argument definitions

use crate::core::MonthKey;
use crate::types::CardStatus;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Manage credit-card accounts, statement imports and expense summaries
#[derive(Parser, Debug)]
#[command(name = "cardledger")]
#[command(about = "Manage credit-card accounts, statement imports and expense summaries", long_about = None)]
pub struct CliArgs {
    /// Path of the JSON ledger store
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = "cardledger.json",
        help = "Path of the JSON ledger store"
    )]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// The ledger operations, one per original page flow
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new account
    Register {
        /// Account email
        #[arg(long)]
        email: String,

        /// Password (8+ chars, upper, lower, digit, one special)
        #[arg(long)]
        password: String,

        /// Date of birth, YYYY-MM-DD
        #[arg(long, value_name = "DATE")]
        birthdate: NaiveDate,

        /// Card number (16 digits, grouping allowed)
        #[arg(long = "card-number", value_name = "NUMBER")]
        card_number: String,

        /// Card expiry, MM/YY
        #[arg(long = "card-expiry", value_name = "MM/YY")]
        card_expiry: String,
    },

    /// Log in and remember the session in the store
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Log out, forgetting the stored session
    Logout,

    /// Import a CSV statement for the logged-in user
    Import {
        /// Path of the statement file (.csv)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the account dashboard
    Dashboard,

    /// Show charges, optionally filtered to one month
    Charges {
        /// Month filter: 'all' or YYYY-MM
        #[arg(long, value_name = "KEY", default_value = "all")]
        month: MonthKey,
    },

    /// List the months the charges view can filter by
    Months,

    /// Update profile fields of the logged-in user
    Profile {
        /// New account email
        #[arg(long)]
        email: Option<String>,

        /// New password
        #[arg(long)]
        password: Option<String>,

        /// New card number
        #[arg(long = "card-number", value_name = "NUMBER")]
        card_number: Option<String>,

        /// New card expiry, MM/YY
        #[arg(long = "card-expiry", value_name = "MM/YY")]
        card_expiry: Option<String>,

        /// New billing day (1-28)
        #[arg(long = "billing-day", value_name = "DAY")]
        billing_day: Option<String>,

        /// New card status
        #[arg(long = "card-status", value_enum, value_name = "STATUS")]
        card_status: Option<CardStatusArg>,
    },
}

/// CLI spelling of a card status
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CardStatusArg {
    Active,
    Locked,
}

impl From<CardStatusArg> for CardStatus {
    fn from(status: CardStatusArg) -> Self {
        match status {
            CardStatusArg::Active => CardStatus::Active,
            CardStatusArg::Locked => CardStatus::Locked,
        }
    }
}
