//! Audit logging system for budget-ledger
//!
//! Records every ledger operation a `Budget` performs, including the ones
//! refused for insufficient funds, in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single record with timestamp, operation, category and
//!   outcome.
//! - `AuditLogger`: writes entries to the audit log file as line-delimited
//!   JSON (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&category))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
