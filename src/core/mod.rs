//! Core business logic module
//!
//! This module contains the ledger's pure logic and orchestration:
//! - `traits` - persistence seams (document store, user repository)
//! - `aggregate` - monthly/category/billing-period expense summaries
//! - `months` - month keys and the month-selection range
//! - `app` - the top-level controller tying flows together

pub mod aggregate;
pub mod app;
pub mod months;
pub mod traits;

pub use aggregate::{
    billing_period_totals, category_totals, filter_by_month, monthly_totals, total_expenses,
    BillingPeriodTotals,
};
pub use app::{
    ChargesView, DashboardSummary, LedgerApp, ProfileUpdate, RegistrationForm,
    DEFAULT_BILLING_DAY,
};
pub use months::{
    months_covering_range, MonthKey, MonthOption, MonthRange, RANGE_START_MONTH, RANGE_START_YEAR,
};
pub use traits::{DocumentStore, UserRepository};
