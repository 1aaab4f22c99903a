//! # Filiaal Identifier
//!
//! Newtype over the database-assigned `BIGSERIAL` key, so a branch id cannot
//! be confused with any other integer flowing through the service.

use serde::{Deserialize, Serialize};

/// Unique identifier of a branch office, assigned by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiliaalId(i64);

impl FiliaalId {
    /// Wrap a raw identifier.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

/// Renders the bare number, which is what appears in resource URIs.
impl std::fmt::Display for FiliaalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_number() {
        assert_eq!(FiliaalId::new(42).to_string(), "42");
        assert_eq!(FiliaalId::new(-1).to_string(), "-1");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&FiliaalId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: FiliaalId = serde_json::from_str("7").unwrap();
        assert_eq!(back, FiliaalId(7));
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(FiliaalId::new(1) < FiliaalId::new(2));
    }
}
