//! budget-ledger - category ledgers and a text spend chart
//!
//! Tracks deposits, withdrawals and transfers across named spending
//! categories and renders each category's ledger plus a bar chart of the
//! share of spending per category.
//!
//! # Architecture
//!
//! - `models`: money, ledger entries and categories
//! - `reports`: the spend chart
//! - `services`: the `Budget` collection and scenario replay
//! - `export`: CSV and JSON ledger exports
//! - `audit`: append-only audit log of ledger operations
//! - `config`: path resolution and user settings
//! - `cli`: command handlers for the `budget` binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use budget_ledger::models::{Category, Money};
//! use budget_ledger::reports::create_spend_chart;
//!
//! let mut food = Category::new("Food");
//! food.deposit(Money::from_cents(90_000), "deposit");
//! assert!(food.withdraw(Money::from_cents(10_555), "groceries"));
//! assert!(food.to_string().ends_with("Total: 794.45"));
//!
//! let chart = create_spend_chart(&[food]);
//! assert!(chart.starts_with("Percentage spent by category"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{LedgerError, LedgerResult};
