//! Scenario replay
//!
//! A scenario is an ordered list of ledger operations read from a JSON or
//! YAML file. Replaying it against a `Budget` rebuilds the ledgers in memory;
//! nothing is written back.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::Budget;

/// A single operation in a scenario file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScenarioOperation {
    Deposit {
        category: String,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Withdraw {
        category: String,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: Money,
        #[serde(default)]
        description: String,
    },
    Transfer {
        from: String,
        to: String,
        #[serde(deserialize_with = "deserialize_amount")]
        amount: Money,
    },
}

impl ScenarioOperation {
    /// Category names referenced by this operation, in order
    fn category_names(&self) -> Vec<&str> {
        match self {
            Self::Deposit { category, .. } | Self::Withdraw { category, .. } => {
                vec![category.as_str()]
            }
            Self::Transfer { from, to, .. } => vec![from.as_str(), to.as_str()],
        }
    }
}

/// Amounts may be written as numbers (`105.55`) or strings (`"$105.55"`)
///
/// Either form must be a whole number of cents within the cent range.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Money::try_from_decimal(n).map_err(serde::de::Error::custom),
        RawAmount::Text(s) => Money::parse(&s).map_err(serde::de::Error::custom),
    }
}

/// A refused withdrawal or transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the operation in the scenario, starting at 1
    pub step: usize,
    pub message: String,
}

/// What happened when a scenario was replayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioOutcome {
    /// Operations that changed a ledger
    pub applied: usize,
    /// Operations refused for insufficient funds
    pub rejected: Vec<Rejection>,
}

/// Categories to create up front plus the operations to replay
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Column order for the chart; undeclared names are appended on first use
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub operations: Vec<ScenarioOperation>,
}

impl Scenario {
    /// Parse a scenario from JSON
    pub fn from_json_str(s: &str) -> LedgerResult<Self> {
        serde_json::from_str(s).map_err(|e| LedgerError::Scenario(e.to_string()))
    }

    /// Parse a scenario from YAML
    pub fn from_yaml_str(s: &str) -> LedgerResult<Self> {
        serde_yaml::from_str(s).map_err(|e| LedgerError::Scenario(e.to_string()))
    }

    /// Load a scenario file, choosing the format by extension
    pub fn from_path(path: &Path) -> LedgerResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let contents = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&contents),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Err(LedgerError::Scenario(format!(
                "Unsupported scenario file {}: expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }

    /// The built-in walkthrough used by `budget demo`
    pub fn demo() -> Self {
        let deposit = |category: &str, cents: i64, description: &str| ScenarioOperation::Deposit {
            category: category.into(),
            amount: Money::from_cents(cents),
            description: description.into(),
        };
        let withdraw = |category: &str, cents: i64, description: &str| ScenarioOperation::Withdraw {
            category: category.into(),
            amount: Money::from_cents(cents),
            description: description.into(),
        };

        Self {
            categories: vec!["Food".into(), "Clothing".into(), "Auto".into()],
            operations: vec![
                deposit("Food", 100_000, "initial deposit"),
                withdraw("Food", 1_015, "groceries"),
                withdraw("Food", 1_589, "restaurant and more food for dessert"),
                ScenarioOperation::Transfer {
                    from: "Food".into(),
                    to: "Clothing".into(),
                    amount: Money::from_cents(5_000),
                },
                withdraw("Clothing", 2_555, ""),
                withdraw("Clothing", 10_000, ""),
                deposit("Auto", 100_000, "initial deposit"),
                withdraw("Auto", 1_500, ""),
            ],
        }
    }

    /// Replay every operation against `budget`
    ///
    /// Declared categories are created first. With `strict`, the first refused
    /// withdrawal or transfer aborts the replay with `InsufficientFunds`;
    /// otherwise refusals are collected in the outcome.
    pub fn apply(&self, budget: &mut Budget, strict: bool) -> LedgerResult<ScenarioOutcome> {
        for name in &self.categories {
            budget.ensure_category(name)?;
        }

        let mut outcome = ScenarioOutcome::default();

        for (index, operation) in self.operations.iter().enumerate() {
            for name in operation.category_names() {
                budget.ensure_category(name)?;
            }

            let (succeeded, source, amount) = match operation {
                ScenarioOperation::Deposit {
                    category,
                    amount,
                    description,
                } => {
                    budget.deposit(category, *amount, description)?;
                    (true, category, *amount)
                }
                ScenarioOperation::Withdraw {
                    category,
                    amount,
                    description,
                } => (
                    budget.withdraw(category, *amount, description)?,
                    category,
                    *amount,
                ),
                ScenarioOperation::Transfer { from, to, amount } => {
                    (budget.transfer(from, to, *amount)?, from, *amount)
                }
            };

            if succeeded {
                outcome.applied += 1;
                continue;
            }

            let available = budget
                .category(source)
                .map(|c| c.get_balance())
                .unwrap_or_default();
            let err = LedgerError::InsufficientFunds {
                category: source.clone(),
                needed: amount,
                available,
            };
            if strict {
                return Err(err);
            }
            outcome.rejected.push(Rejection {
                step: index + 1,
                message: err.to_string(),
            });
        }

        Ok(outcome)
    }
}
