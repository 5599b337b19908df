//! Export module for budget-ledger
//!
//! Writes category ledgers out after a run:
//! - CSV: one row per ledger entry (spreadsheet-compatible)
//! - JSON: categories with balances and ledgers, with schema versioning

pub mod csv;
pub mod json;

pub use self::csv::export_ledger_csv;
pub use self::json::{export_ledger_json, CategoryExport, LedgerExport, EXPORT_SCHEMA_VERSION};
