//! Core data models for budget-ledger
//!
//! Money amounts, ledger entries, and the categories that own them.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;

pub use category::Category;
pub use entry::Entry;
pub use ids::CategoryId;
pub use money::{Money, MoneyParseError};
