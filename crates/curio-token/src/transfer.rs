//! Transfer records for bank ledger operations.

use crate::amount::Amount;
use crate::wallet::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique transfer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferId(String);

impl TransferId {
    /// Create a new random transfer ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of ledger movement a transfer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    /// Account-to-account payment.
    Payment,
    /// Faucet funding (test/dev only, credits out of thin air).
    Faucet,
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payment => write!(f, "payment"),
            Self::Faucet => write!(f, "faucet"),
        }
    }
}

/// Transfer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// Created but not yet applied to the ledger.
    Pending,
    /// Applied to the ledger.
    Completed,
    /// Rejected; the ledger is unchanged.
    Failed,
}

impl TransferStatus {
    /// Whether the transfer reached a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// A record of one ledger movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    /// Unique transfer ID.
    pub id: TransferId,
    /// Kind of movement.
    pub kind: TransferKind,
    /// Source account (`None` for faucet credits).
    pub from: Option<Address>,
    /// Destination account.
    pub to: Address,
    /// Amount moved.
    pub amount: Amount,
    /// Current status.
    pub status: TransferStatus,
    /// Payer signature over the transfer ID (payments only).
    pub signature: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Transfer {
    /// Create a pending payment record.
    #[must_use]
    pub fn payment(from: Address, to: Address, amount: Amount) -> Self {
        Self {
            id: TransferId::new(),
            kind: TransferKind::Payment,
            from: Some(from),
            to,
            amount,
            status: TransferStatus::Pending,
            signature: None,
            created_at: Utc::now(),
        }
    }

    /// Create a pending faucet record.
    #[must_use]
    pub fn faucet(to: Address, amount: Amount) -> Self {
        Self {
            id: TransferId::new(),
            kind: TransferKind::Faucet,
            from: None,
            to,
            amount,
            status: TransferStatus::Pending,
            signature: None,
            created_at: Utc::now(),
        }
    }

    /// Mark the transfer completed, attaching the payer's signature.
    pub fn mark_completed(&mut self, signature: Option<String>) {
        self.status = TransferStatus::Completed;
        self.signature = signature;
    }
}
