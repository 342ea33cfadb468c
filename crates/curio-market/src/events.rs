//! Marketplace notification events.
//!
//! One event is recorded per successful state-changing operation, in
//! operation order. `update_listing` re-records [`MarketEvent::ItemListed`]
//! to signal the new effective offer.

use curio_nft::TokenId;
use curio_token::{Address, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A marketplace notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarketEvent {
    /// A listing was created or repriced.
    ItemListed {
        /// Seller who owns the offer.
        seller: Address,
        /// Collection address.
        collection: Address,
        /// Token ID.
        token_id: TokenId,
        /// Effective asking price.
        price: Amount,
    },
    /// A listing was canceled.
    ItemCanceled {
        /// Seller recorded on the canceled listing.
        seller: Address,
        /// Collection address.
        collection: Address,
        /// Token ID.
        token_id: TokenId,
    },
    /// A listed token was purchased.
    ItemBought {
        /// The purchasing account.
        buyer: Address,
        /// Collection address.
        collection: Address,
        /// Token ID.
        token_id: TokenId,
        /// The listed price that was met.
        price: Amount,
    },
}

impl MarketEvent {
    /// Create an `ItemListed` event.
    #[must_use]
    pub fn listed(seller: Address, collection: Address, token_id: TokenId, price: Amount) -> Self {
        Self::ItemListed {
            seller,
            collection,
            token_id,
            price,
        }
    }

    /// Create an `ItemCanceled` event.
    #[must_use]
    pub fn canceled(seller: Address, collection: Address, token_id: TokenId) -> Self {
        Self::ItemCanceled {
            seller,
            collection,
            token_id,
        }
    }

    /// Create an `ItemBought` event.
    #[must_use]
    pub fn bought(buyer: Address, collection: Address, token_id: TokenId, price: Amount) -> Self {
        Self::ItemBought {
            buyer,
            collection,
            token_id,
            price,
        }
    }

    /// The collection the event concerns.
    #[must_use]
    pub fn collection(&self) -> &Address {
        match self {
            Self::ItemListed { collection, .. }
            | Self::ItemCanceled { collection, .. }
            | Self::ItemBought { collection, .. } => collection,
        }
    }

    /// The token the event concerns.
    #[must_use]
    pub fn token_id(&self) -> TokenId {
        match self {
            Self::ItemListed { token_id, .. }
            | Self::ItemCanceled { token_id, .. }
            | Self::ItemBought { token_id, .. } => *token_id,
        }
    }
}

impl fmt::Display for MarketEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemListed {
                seller,
                collection,
                token_id,
                price,
            } => write!(f, "item_listed {collection} #{token_id} at {price} by {seller}"),
            Self::ItemCanceled {
                seller,
                collection,
                token_id,
            } => write!(f, "item_canceled {collection} #{token_id} by {seller}"),
            Self::ItemBought {
                buyer,
                collection,
                token_id,
                price,
            } => write!(f, "item_bought {collection} #{token_id} at {price} by {buyer}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_token::Wallet;

    fn address() -> Address {
        Wallet::generate().expect("wallet").address().clone()
    }

    #[test]
    fn accessors_cover_all_kinds() {
        let collection = address();
        let account = address();

        let events = [
            MarketEvent::listed(account.clone(), collection.clone(), TokenId::new(1), Amount::curio(0.1)),
            MarketEvent::canceled(account.clone(), collection.clone(), TokenId::new(2)),
            MarketEvent::bought(account, collection.clone(), TokenId::new(3), Amount::curio(0.1)),
        ];

        for (i, event) in events.iter().enumerate() {
            assert_eq!(event.collection(), &collection);
            assert_eq!(event.token_id(), TokenId::new(i as u64 + 1));
        }
    }

    #[test]
    fn display_names_the_kind() {
        let event = MarketEvent::listed(address(), address(), TokenId::new(0), Amount::curio(0.1));
        assert!(event.to_string().starts_with("item_listed"));
    }

    #[test]
    fn serde_tags_the_kind() {
        let event = MarketEvent::canceled(address(), address(), TokenId::new(4));
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"kind\":\"item_canceled\""));

        let parsed: MarketEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(event, parsed);
    }
}
