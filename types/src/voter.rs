//! Voter identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque string uniquely identifying a voter.
///
/// The ledger only ever compares these for equality — the identifier's
/// internal structure (national id, registration number, …) is the
/// caller's business. Blankness checks happen in the election service
/// before an id ever reaches the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoterId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
