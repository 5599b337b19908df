//! Strongly-typed category identifier
//!
//! Category names are what the ledger renders; the id tags audit records so
//! two runs that reuse a name can still be told apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "cat-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = CategoryId::new();
        let display = id.to_string();
        assert!(display.starts_with("cat-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CategoryId::new(), CategoryId::new());
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json.len(), 38);
        assert_eq!(serde_json::from_str::<CategoryId>(&json).unwrap(), id);
    }
}
