//! Collection registry client.
//!
//! Backed by an in-memory registry of collections; the surface mirrors what
//! a chain-backed collection contract would expose. The marketplace only
//! uses `owner_of`, `get_approved`, and `transfer`; minting and approval are
//! exercised by owners directly.

use crate::error::{NftError, Result};
use crate::token::{TokenId, TokenRecord};
use curio_token::Address;
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Descriptive metadata for a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Human-readable collection name.
    pub name: String,
    /// Short ticker symbol.
    pub symbol: String,
    /// Number of tokens minted so far.
    pub minted: u64,
}

#[derive(Debug)]
struct CollectionState {
    name: String,
    symbol: String,
    next_token: u64,
    tokens: HashMap<u64, TokenRecord>,
}

#[derive(Debug, Default)]
struct RegistryState {
    collections: HashMap<String, CollectionState>,
}

/// Client for the NFT collection registry.
///
/// Cloneable handle over shared registry state; all operations are applied
/// under one internal lock.
#[derive(Debug, Clone, Default)]
pub struct CollectionClient {
    state: Arc<Mutex<RegistryState>>,
}

impl CollectionClient {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new collection and return its address.
    pub async fn create_collection(
        &self,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Address {
        let mut raw = [0u8; 32];
        OsRng.fill_bytes(&mut raw);
        let address = Address::from_array(raw);

        let mut state = self.state.lock().await;
        let name = name.into();
        state.collections.insert(
            address.as_str().to_string(),
            CollectionState {
                name: name.clone(),
                symbol: symbol.into(),
                next_token: 0,
                tokens: HashMap::new(),
            },
        );
        info!(collection = %address, name = %name, "collection created");
        address
    }

    /// Mint a new token to `owner`, returning the assigned token ID.
    ///
    /// IDs are assigned sequentially starting at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection does not exist.
    pub async fn mint(
        &self,
        collection: &Address,
        owner: &Address,
        uri: impl Into<String>,
    ) -> Result<TokenId> {
        let mut state = self.state.lock().await;
        let coll = state
            .collections
            .get_mut(collection.as_str())
            .ok_or_else(|| NftError::CollectionNotFound {
                address: collection.clone(),
            })?;

        let token_id = TokenId::new(coll.next_token);
        coll.next_token += 1;
        coll.tokens.insert(
            token_id.value(),
            TokenRecord {
                owner: owner.clone(),
                approved: None,
                uri: uri.into(),
            },
        );

        info!(collection = %collection, token_id = %token_id, owner = %owner, "token minted");
        Ok(token_id)
    }

    /// Current owner of a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection or token does not exist.
    pub async fn owner_of(&self, collection: &Address, token_id: TokenId) -> Result<Address> {
        let state = self.state.lock().await;
        Ok(Self::record(&state, collection, token_id)?.owner.clone())
    }

    /// The operator approved to transfer a token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection or token does not exist.
    pub async fn get_approved(
        &self,
        collection: &Address,
        token_id: TokenId,
    ) -> Result<Option<Address>> {
        let state = self.state.lock().await;
        Ok(Self::record(&state, collection, token_id)?.approved.clone())
    }

    /// Metadata URI of a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection or token does not exist.
    pub async fn token_uri(&self, collection: &Address, token_id: TokenId) -> Result<String> {
        let state = self.state.lock().await;
        Ok(Self::record(&state, collection, token_id)?.uri.clone())
    }

    /// Descriptive metadata for a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection does not exist.
    pub async fn collection_info(&self, collection: &Address) -> Result<CollectionInfo> {
        let state = self.state.lock().await;
        let coll = state
            .collections
            .get(collection.as_str())
            .ok_or_else(|| NftError::CollectionNotFound {
                address: collection.clone(),
            })?;
        Ok(CollectionInfo {
            name: coll.name.clone(),
            symbol: coll.symbol.clone(),
            minted: coll.next_token,
        })
    }

    /// Set (or clear, with `None`) the approved operator for a token.
    ///
    /// Only the token's current owner may change its approval.
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not exist or `caller` is not the
    /// owner.
    pub async fn approve(
        &self,
        caller: &Address,
        collection: &Address,
        token_id: TokenId,
        operator: Option<&Address>,
    ) -> Result<()> {
        let mut state = self.state.lock().await;
        let record = Self::record_mut(&mut state, collection, token_id)?;
        if &record.owner != caller {
            return Err(NftError::NotAuthorized {
                operator: caller.clone(),
            });
        }
        record.approved = operator.cloned();

        debug!(
            collection = %collection,
            token_id = %token_id,
            operator = operator.map_or_else(|| "none".to_string(), ToString::to_string),
            "approval updated"
        );
        Ok(())
    }

    /// Transfer a token from `from` to `to`.
    ///
    /// The operator must be the token's owner or its approved operator, and
    /// `from` must be the current owner. Any approval is cleared by the
    /// transfer.
    ///
    /// # Errors
    ///
    /// Returns an error if the token does not exist, `from` is not the
    /// owner, or the operator is not authorized. A failed transfer leaves
    /// ownership unchanged.
    pub async fn transfer(
        &self,
        operator: &Address,
        collection: &Address,
        from: &Address,
        to: &Address,
        token_id: TokenId,
    ) -> Result<()> {
        let mut state = self.state.lock().await;
        let record = Self::record_mut(&mut state, collection, token_id)?;

        if &record.owner != from {
            return Err(NftError::WrongOwner {
                from: from.clone(),
                collection: collection.clone(),
                token_id,
            });
        }
        let approved = record.approved.as_ref() == Some(operator);
        if &record.owner != operator && !approved {
            return Err(NftError::NotAuthorized {
                operator: operator.clone(),
            });
        }

        record.owner = to.clone();
        record.approved = None;

        debug!(
            collection = %collection,
            token_id = %token_id,
            from = %from,
            to = %to,
            "token transferred"
        );
        Ok(())
    }

    fn record<'a>(
        state: &'a RegistryState,
        collection: &Address,
        token_id: TokenId,
    ) -> Result<&'a TokenRecord> {
        let coll = state
            .collections
            .get(collection.as_str())
            .ok_or_else(|| NftError::CollectionNotFound {
                address: collection.clone(),
            })?;
        coll.tokens
            .get(&token_id.value())
            .ok_or_else(|| NftError::TokenNotFound {
                collection: collection.clone(),
                token_id,
            })
    }

    fn record_mut<'a>(
        state: &'a mut RegistryState,
        collection: &Address,
        token_id: TokenId,
    ) -> Result<&'a mut TokenRecord> {
        let coll = state
            .collections
            .get_mut(collection.as_str())
            .ok_or_else(|| NftError::CollectionNotFound {
                address: collection.clone(),
            })?;
        coll.tokens
            .get_mut(&token_id.value())
            .ok_or_else(|| NftError::TokenNotFound {
                collection: collection.clone(),
                token_id,
            })
    }
}
