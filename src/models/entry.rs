//! Ledger entry model

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One recorded movement in a category ledger
///
/// Deposits carry a positive amount, withdrawals a negative one. Entries are
/// never edited after they are appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub amount: Money,
    #[serde(default)]
    pub description: String,
}

impl Entry {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    /// Whether this entry takes money out of its category
    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }
}
