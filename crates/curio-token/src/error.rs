//! Error types for CURIO currency operations.

use crate::amount::Amount;
use crate::wallet::Address;
use thiserror::Error;

/// Result type alias for currency operations.
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors that can occur during currency operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Invalid account address format.
    #[error("invalid address: {message}")]
    InvalidAddress {
        /// Description of the address error.
        message: String,
    },

    /// Insufficient balance for a transfer.
    #[error("insufficient funds: have {have}, need {need}")]
    InsufficientFunds {
        /// Current balance of the paying account.
        have: Amount,
        /// Amount the transfer requires.
        need: Amount,
    },

    /// Account is frozen and cannot send or receive.
    #[error("account frozen: {address}")]
    AccountFrozen {
        /// The frozen account.
        address: Address,
    },

    /// Transfer amount is zero.
    #[error("transfer amount must be above zero")]
    ZeroTransfer,

    /// Transfer record not found.
    #[error("transfer not found: {id}")]
    TransferNotFound {
        /// Transfer ID.
        id: String,
    },

    /// Wallet error.
    #[error("wallet error: {message}")]
    WalletError {
        /// Description of the wallet error.
        message: String,
    },
}

impl TokenError {
    /// Create an invalid address error.
    #[must_use]
    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress {
            message: message.into(),
        }
    }

    /// Create an insufficient funds error.
    #[must_use]
    pub fn insufficient_funds(have: Amount, need: Amount) -> Self {
        Self::InsufficientFunds { have, need }
    }

    /// Create a wallet error.
    #[must_use]
    pub fn wallet_error(message: impl Into<String>) -> Self {
        Self::WalletError {
            message: message.into(),
        }
    }
}
