//! Reports module for budget-ledger
//!
//! Provides the spending-distribution chart rendered across categories.

pub mod spend_chart;

pub use spend_chart::{create_spend_chart, SpendChart, SpendColumn, CHART_TITLE};
