//! Error types for collection operations.

use crate::token::TokenId;
use curio_token::Address;
use thiserror::Error;

/// Result type alias for collection operations.
pub type Result<T> = std::result::Result<T, NftError>;

/// Errors that can occur in collection operations.
#[derive(Debug, Error)]
pub enum NftError {
    /// No collection registered under the address.
    #[error("collection not found: {address}")]
    CollectionNotFound {
        /// The unknown collection address.
        address: Address,
    },

    /// The collection holds no token with this ID.
    #[error("token not found: {collection} #{token_id}")]
    TokenNotFound {
        /// Collection address.
        collection: Address,
        /// The unknown token ID.
        token_id: TokenId,
    },

    /// Caller is neither the token's owner nor its approved operator.
    #[error("operator not authorized: {operator}")]
    NotAuthorized {
        /// The rejected operator.
        operator: Address,
    },

    /// The stated source account does not own the token.
    #[error("{from} does not own {collection} #{token_id}")]
    WrongOwner {
        /// The stated (incorrect) owner.
        from: Address,
        /// Collection address.
        collection: Address,
        /// Token ID.
        token_id: TokenId,
    },
}
