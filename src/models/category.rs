//! Category model
//!
//! A category is a named bucket owning an append-only ledger of signed
//! entries. Its balance is always derived from the ledger, never cached.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::Entry;
use super::ids::CategoryId;
use super::money::Money;

/// Width of the rendered ledger, title included
pub const LEDGER_WIDTH: usize = 30;
/// Width of the description column in the rendered ledger
pub const DESCRIPTION_WIDTH: usize = 23;
/// Width of the amount column in the rendered ledger
pub const AMOUNT_WIDTH: usize = 7;

/// A spending category with its ledger
///
/// Balances are plain `i64` cent sums and overflow panics in debug builds.
/// `Budget` keeps every ledger within range by capping the total volume it
/// records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Entries in insertion order
    #[serde(default)]
    ledger: Vec<Entry>,
}

impl Category {
    /// Create a new category with an empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    /// The ledger entries in the order they were recorded
    pub fn ledger(&self) -> &[Entry] {
        &self.ledger
    }

    /// Record a deposit
    ///
    /// The amount is not sign-checked; a negative deposit is recorded as-is.
    pub fn deposit(&mut self, amount: Money, description: impl Into<String>) {
        self.ledger.push(Entry::new(amount, description));
    }

    /// Record a withdrawal if the balance covers it
    ///
    /// Returns `false` and leaves the ledger untouched when funds are short.
    pub fn withdraw(&mut self, amount: Money, description: impl Into<String>) -> bool {
        if !self.check_funds(amount) {
            return false;
        }
        self.ledger.push(Entry::new(-amount, description));
        true
    }

    /// Drop entries recorded after the first `len`
    pub(crate) fn truncate_ledger(&mut self, len: usize) {
        self.ledger.truncate(len);
    }

    /// Sum of every entry amount
    pub fn get_balance(&self) -> Money {
        self.ledger.iter().map(|e| e.amount).sum()
    }

    /// Whether `amount` can be taken out without going below zero
    pub fn check_funds(&self, amount: Money) -> bool {
        amount <= self.get_balance()
    }

    /// Move `amount` from this category into `destination`
    ///
    /// The source is withdrawn first; the destination is only touched once
    /// that withdrawal has been recorded. On insufficient funds neither
    /// ledger changes.
    pub fn transfer(&mut self, amount: Money, destination: &mut Category) -> bool {
        if !self.check_funds(amount) {
            return false;
        }

        let withdrawn = self.withdraw(amount, format!("Transfer to {}", destination.name));
        if withdrawn {
            destination.deposit(amount, format!("Transfer from {}", self.name));
        }
        withdrawn
    }

    /// Total taken out of this category: absolute sum of its negative entries
    pub fn spent(&self) -> Money {
        self.ledger
            .iter()
            .filter(|e| e.is_outflow())
            .map(|e| e.amount.abs())
            .sum()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:*^width$}", self.name, width = LEDGER_WIDTH)?;

        for entry in &self.ledger {
            let description: String = entry.description.chars().take(DESCRIPTION_WIDTH).collect();
            writeln!(
                f,
                "{:<dw$}{:>aw$}",
                description,
                entry.amount.format_plain(),
                dw = DESCRIPTION_WIDTH,
                aw = AMOUNT_WIDTH
            )?;
        }

        write!(f, "Total: {}", self.get_balance().format_plain())
    }
}
