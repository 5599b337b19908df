//! Service layer for budget-ledger
//!
//! Operations that span several categories: name lookup, transfers between
//! named categories, auditing, and scenario replay.

pub mod budget;
pub mod scenario;

pub use budget::Budget;
pub use scenario::{Rejection, Scenario, ScenarioOperation, ScenarioOutcome};
