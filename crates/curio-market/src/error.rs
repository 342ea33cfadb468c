//! Error types for curio-market.

use curio_nft::TokenId;
use curio_token::{Address, Amount};
use thiserror::Error;

/// Errors that can occur in marketplace operations.
///
/// Every variant is fatal to the current operation; no partial mutation
/// survives a failure and nothing is retried internally.
#[derive(Debug, Error)]
pub enum MarketError {
    /// The token already has an active listing.
    #[error("already listed: {collection} #{token_id}")]
    AlreadyListed {
        /// Collection address.
        collection: Address,
        /// Token ID.
        token_id: TokenId,
    },

    /// The token has no active listing.
    #[error("not listed: {collection} #{token_id}")]
    NotListed {
        /// Collection address.
        collection: Address,
        /// Token ID.
        token_id: TokenId,
    },

    /// Caller does not currently own the token.
    #[error("caller is not the token owner")]
    NotOwner,

    /// Listing price must be positive.
    #[error("price must be above zero")]
    PriceMustBeAboveZero,

    /// Payment does not cover the listed price.
    #[error("price not met for {collection} #{token_id}: listed at {price}")]
    PriceNotMet {
        /// Collection address.
        collection: Address,
        /// Token ID.
        token_id: TokenId,
        /// The listed price the payment fell short of.
        price: Amount,
    },

    /// The marketplace is not approved to transfer the token.
    #[error("marketplace not approved for token")]
    NotApprovedForMarketplace,

    /// Caller has no withdrawable proceeds.
    #[error("no proceeds to withdraw")]
    NoProceeds,

    /// An external asset or currency transfer was rejected.
    #[error("transfer failed: {reason}")]
    TransferFailed {
        /// What the external collaborator reported.
        reason: String,
    },

    /// A proceeds credit of zero was attempted.
    #[error("credit amount must be above zero")]
    ZeroCredit,

    /// A proceeds credit would overflow the seller's balance.
    #[error("proceeds balance overflow for {seller}")]
    ProceedsOverflow {
        /// The seller whose balance would overflow.
        seller: Address,
    },

    /// Collection oracle query failed.
    #[error("collection error: {0}")]
    Collection(String),

    /// Currency operation failed outside a transfer interaction.
    #[error("payment error: {0}")]
    Payment(String),
}

impl MarketError {
    /// Create a transfer failure from an external collaborator's report.
    #[must_use]
    pub fn transfer_failed(reason: impl Into<String>) -> Self {
        Self::TransferFailed {
            reason: reason.into(),
        }
    }
}

impl From<curio_nft::NftError> for MarketError {
    fn from(e: curio_nft::NftError) -> Self {
        Self::Collection(e.to_string())
    }
}

impl From<curio_token::TokenError> for MarketError {
    fn from(e: curio_token::TokenError) -> Self {
        Self::Payment(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_token::Wallet;

    #[test]
    fn price_not_met_carries_context() {
        let collection = Wallet::generate().expect("wallet").address().clone();
        let err = MarketError::PriceNotMet {
            collection: collection.clone(),
            token_id: TokenId::new(0),
            price: Amount::curio(0.1),
        };
        let text = err.to_string();
        assert!(text.contains(collection.as_str()));
        assert!(text.contains("#0"));
        assert!(text.contains("0.1"));
    }

    #[test]
    fn nft_errors_wrap_as_collection() {
        let collection = Wallet::generate().expect("wallet").address().clone();
        let err: MarketError = curio_nft::NftError::TokenNotFound {
            collection,
            token_id: TokenId::new(2),
        }
        .into();
        assert!(matches!(err, MarketError::Collection(_)));
    }
}
