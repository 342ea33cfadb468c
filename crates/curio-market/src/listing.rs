//! Listing registry.
//!
//! Keyed store of active sale offers. The book performs no validation;
//! guards and the marketplace operations are responsible for correctness.

use curio_nft::TokenId;
use curio_token::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An active sale offer for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Account that created the listing and receives the proceeds.
    pub seller: Address,
    /// Asking price in base units. Always positive for a stored listing.
    pub price: Amount,
}

/// The registry of active listings, keyed by `(collection, token_id)`.
///
/// A token is listed iff it has an entry here; absence is the "no active
/// listing" sentinel. At most one listing exists per token.
#[derive(Debug, Default)]
pub struct ListingBook {
    listings: HashMap<(Address, TokenId), Listing>,
}

impl ListingBook {
    /// Creates a new empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the listing for a token, if any.
    #[must_use]
    pub fn get(&self, collection: &Address, token_id: TokenId) -> Option<&Listing> {
        self.listings.get(&(collection.clone(), token_id))
    }

    /// Inserts or replaces the listing for a token.
    pub fn put(&mut self, collection: Address, token_id: TokenId, seller: Address, price: Amount) {
        self.listings
            .insert((collection, token_id), Listing { seller, price });
    }

    /// Removes the listing for a token, returning it if present.
    pub fn remove(&mut self, collection: &Address, token_id: TokenId) -> Option<Listing> {
        self.listings.remove(&(collection.clone(), token_id))
    }

    /// Number of active listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the book holds no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
