//! Budget service
//!
//! Owns an ordered set of categories addressed by name and runs ledger
//! operations against them, auditing each one when a logger is attached.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money};
use crate::reports::create_spend_chart;

/// Upper bound on the summed magnitude of every amount a budget records
///
/// Keeps each balance, each spent total and the chart's grand total inside
/// the `i64` cent range.
const MAX_VOLUME: u64 = i64::MAX as u64;

/// An ordered collection of categories
///
/// Ledger changes are rolled back when the audit write for them fails.
#[derive(Debug, Default)]
pub struct Budget {
    categories: Vec<Category>,
    audit: Option<AuditLogger>,
    volume: u64,
}

impl Budget {
    /// Create an empty budget without audit logging
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty budget that records every operation to `logger`
    pub fn with_audit(logger: AuditLogger) -> Self {
        Self {
            audit: Some(logger),
            ..Self::default()
        }
    }

    /// Categories in the order they were added
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name (case-insensitive)
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.position(name).map(|i| &self.categories[i])
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.categories
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    fn require(&self, name: &str) -> LedgerResult<usize> {
        self.position(name)
            .ok_or_else(|| LedgerError::category_not_found(name))
    }

    fn record(&self, entry: AuditEntry) -> LedgerResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    /// Volume after recording `amount` on `legs` ledgers
    fn reserve(&self, amount: Money, legs: u64) -> LedgerResult<u64> {
        amount
            .cents()
            .unsigned_abs()
            .checked_mul(legs)
            .and_then(|v| v.checked_add(self.volume))
            .filter(|v| *v <= MAX_VOLUME)
            .ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Amount {} would push the budget's recorded total out of range",
                    amount
                ))
            })
    }

    /// Add a new category at the end of the budget
    pub fn add_category(&mut self, name: &str) -> LedgerResult<&Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.position(name).is_some() {
            return Err(LedgerError::duplicate_category(name));
        }

        let index = self.categories.len();
        self.categories.push(Category::new(name));
        if let Err(e) = self.record(AuditEntry::create(&self.categories[index])) {
            self.categories.pop();
            return Err(e);
        }

        Ok(&self.categories[index])
    }

    /// Return the named category, adding it if it doesn't exist yet
    pub fn ensure_category(&mut self, name: &str) -> LedgerResult<&Category> {
        match self.position(name) {
            Some(index) => Ok(&self.categories[index]),
            None => self.add_category(name),
        }
    }

    /// Deposit into a category
    pub fn deposit(&mut self, name: &str, amount: Money, description: &str) -> LedgerResult<()> {
        let index = self.require(name)?;
        let volume = self.reserve(amount, 1)?;

        let category = &mut self.categories[index];
        let len = category.ledger().len();
        category.deposit(amount, description);

        let entry = AuditEntry::deposit(category, amount, description);
        if let Err(e) = self.record(entry) {
            self.categories[index].truncate_ledger(len);
            return Err(e);
        }
        self.volume = volume;
        Ok(())
    }

    /// Withdraw from a category
    ///
    /// `Ok(false)` means the category lacked the funds and nothing was recorded
    /// in its ledger.
    pub fn withdraw(&mut self, name: &str, amount: Money, description: &str) -> LedgerResult<bool> {
        let index = self.require(name)?;
        let volume = self.reserve(amount, 1)?;

        let category = &mut self.categories[index];
        let len = category.ledger().len();
        let succeeded = category.withdraw(amount, description);

        let entry = AuditEntry::withdraw(category, amount, description, succeeded);
        if let Err(e) = self.record(entry) {
            self.categories[index].truncate_ledger(len);
            return Err(e);
        }
        if succeeded {
            self.volume = volume;
        }
        Ok(succeeded)
    }

    /// Transfer between two distinct categories
    ///
    /// `Ok(false)` means the source lacked the funds and neither ledger changed.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> LedgerResult<bool> {
        let source_index = self.require(from)?;
        let destination_index = self.require(to)?;

        if source_index == destination_index {
            return Err(LedgerError::Validation(format!(
                "Cannot transfer from '{}' to itself",
                self.categories[source_index].name
            )));
        }
        let volume = self.reserve(amount, 2)?;

        let (source, destination) =
            pair_mut(&mut self.categories, source_index, destination_index);
        let lens = (source.ledger().len(), destination.ledger().len());
        let succeeded = source.transfer(amount, destination);

        let entry = AuditEntry::transfer(source, destination, amount, succeeded);
        if let Err(e) = self.record(entry) {
            self.categories[source_index].truncate_ledger(lens.0);
            self.categories[destination_index].truncate_ledger(lens.1);
            return Err(e);
        }
        if succeeded {
            self.volume = volume;
        }
        Ok(succeeded)
    }

    /// Render the spend chart across all categories in budget order
    pub fn spend_chart(&self) -> String {
        create_spend_chart(&self.categories)
    }
}

/// Borrow two distinct elements mutably at once
fn pair_mut(items: &mut [Category], a: usize, b: usize) -> (&mut Category, &mut Category) {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
