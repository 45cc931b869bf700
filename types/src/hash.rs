//! Identifier types for the two legs of a pair.
//!
//! Neither identifier has a mandated format, so both are kept as opaque
//! strings and serialized as bare JSON strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the transaction output carrying a mobUSD leg.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxoId(String);

impl TxoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TxoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash of the reserve-side transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RsvHash(String);

impl RsvHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RsvHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        assert_eq!(serde_json::to_string(&TxoId::new("txo1")).unwrap(), "\"txo1\"");
        assert_eq!(serde_json::to_string(&RsvHash::new("abc123")).unwrap(), "\"abc123\"");
    }

    #[test]
    fn empty_identifier_is_allowed() {
        let id: TxoId = serde_json::from_str("\"\"").unwrap();
        assert!(id.is_empty());
    }
}
