//! JSON Export functionality
//!
//! Exports category ledgers with their balances and schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Entry, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One category in an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExport {
    pub id: String,
    pub name: String,
    pub balance: Money,
    pub spent: Money,
    pub ledger: Vec<Entry>,
}

impl From<&Category> for CategoryExport {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            balance: category.get_balance(),
            spent: category.spent(),
            ledger: category.ledger().to_vec(),
        }
    }
}

/// Ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Categories in budget order
    pub categories: Vec<CategoryExport>,
}

impl LedgerExport {
    pub fn from_categories(categories: &[Category]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            categories: categories.iter().map(CategoryExport::from).collect(),
        }
    }
}

/// Export `categories` as pretty-printed JSON and flush the writer
pub fn export_ledger_json<W: Write>(categories: &[Category], writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_categories(categories);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_ledger_json() {
        let mut food = Category::new("Food");
        food.deposit(Money::from_cents(90_000), "deposit");
        food.withdraw(Money::from_cents(10_555), "groceries");

        let mut buffer = Vec::new();
        export_ledger_json(std::slice::from_ref(&food), &mut buffer).unwrap();

        let export: LedgerExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.categories.len(), 1);

        let exported = &export.categories[0];
        assert_eq!(exported.name, "Food");
        assert_eq!(exported.id, food.id.to_string());
        assert_eq!(exported.balance, Money::from_cents(79_445));
        assert_eq!(exported.spent, Money::from_cents(10_555));
        assert_eq!(exported.ledger, food.ledger());
    }

    /// Accepts writes but fails to flush, like a full disk behind a buffer
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn test_flush_failure_is_reported() {
        let mut writer = FailingFlush(Vec::new());
        let err = export_ledger_json(&[Category::new("Food")], &mut writer).unwrap_err();

        assert!(matches!(err, LedgerError::Export(_)));
        assert!(err.to_string().contains("disk full"));
        assert!(!writer.0.is_empty());
    }
}
