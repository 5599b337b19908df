//! Audit CLI command
//!
//! Prints the most recent audit log entries.

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;

/// Format audit entries for the terminal, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries recorded.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handle `budget audit`
pub fn handle_audit_command(paths: &LedgerPaths, limit: usize) -> LedgerResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;
    println!("{}", format_audit_entries(&entries));
    Ok(())
}
