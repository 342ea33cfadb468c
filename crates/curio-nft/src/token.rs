//! Token identifiers and records.

use curio_token::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a token within one collection.
///
/// IDs are assigned sequentially from zero as tokens are minted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TokenId(u64);

impl TokenId {
    /// Wrap a raw token number.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw token number.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Per-token state held by a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Current owner.
    pub owner: Address,
    /// Operator approved to transfer this token, if any.
    ///
    /// Cleared on every transfer; a new owner starts with no approval.
    pub approved: Option<Address>,
    /// Metadata URI.
    pub uri: String,
}
