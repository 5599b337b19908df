//! Audit entry data structures
//!
//! Defines the structure of audit log entries: which ledger operation ran,
//! against which category, and whether it went through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Category, Money};

/// Ledger operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A category was added to the budget
    Create,
    Deposit,
    Withdraw,
    Transfer,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Deposit => write!(f, "DEPOSIT"),
            Operation::Withdraw => write!(f, "WITHDRAW"),
            Operation::Transfer => write!(f, "TRANSFER"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected category
    pub category_id: String,

    /// Name of the affected category (the source, for transfers)
    pub category: String,

    /// Destination category for transfers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,

    /// Amount requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Ledger description supplied with the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// False when the operation was refused for lack of funds
    pub succeeded: bool,

    /// Category balance once the operation finished
    pub balance_after: Money,
}

impl AuditEntry {
    fn base(operation: Operation, category: &Category, succeeded: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            category_id: category.id.to_string(),
            category: category.name.clone(),
            counterparty: None,
            amount: None,
            description: None,
            succeeded,
            balance_after: category.get_balance(),
        }
    }

    /// Entry for a newly added category
    pub fn create(category: &Category) -> Self {
        Self::base(Operation::Create, category, true)
    }

    /// Entry for a deposit
    pub fn deposit(category: &Category, amount: Money, description: &str) -> Self {
        let mut entry = Self::base(Operation::Deposit, category, true);
        entry.amount = Some(amount);
        entry.description = non_empty(description);
        entry
    }

    /// Entry for a withdrawal attempt
    pub fn withdraw(category: &Category, amount: Money, description: &str, succeeded: bool) -> Self {
        let mut entry = Self::base(Operation::Withdraw, category, succeeded);
        entry.amount = Some(amount);
        entry.description = non_empty(description);
        entry
    }

    /// Entry for a transfer attempt, recorded against the source category
    pub fn transfer(source: &Category, destination: &Category, amount: Money, succeeded: bool) -> Self {
        let mut entry = Self::base(Operation::Transfer, source, succeeded);
        entry.counterparty = Some(destination.name.clone());
        entry.amount = Some(amount);
        entry
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.category,
            self.category_id
        );

        if let Some(to) = &self.counterparty {
            output.push_str(&format!(" -> {}", to));
        }

        if let Some(amount) = self.amount {
            output.push_str(&format!(" {}", amount));
        }

        if let Some(description) = &self.description {
            output.push_str(&format!(" \"{}\"", description));
        }

        if !self.succeeded {
            output.push_str(" REJECTED");
        }

        output.push_str(&format!("\n  Balance: {}", self.balance_after));

        output
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
