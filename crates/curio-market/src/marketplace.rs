//! Marketplace operations.
//!
//! Orchestrates the guards, listing registry, proceeds ledger, and the two
//! external collaborators (collection registry, bank ledger) into the five
//! public operations: list, cancel, update, buy, withdraw.
//!
//! Every operation runs under one lock over all marketplace state, so each
//! call commits or aborts as a unit. Internal state is mutated before any
//! outbound transfer is attempted; if the transfer is rejected, the mutation
//! is reversed under the same lock and the caller sees
//! [`MarketError::TransferFailed`].

use crate::error::MarketError;
use crate::events::MarketEvent;
use crate::guards;
use crate::listing::{Listing, ListingBook};
use crate::proceeds::ProceedsLedger;
use curio_nft::{CollectionClient, TokenId};
use curio_token::{Address, Amount, BankClient, Wallet};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct MarketState {
    listings: ListingBook,
    proceeds: ProceedsLedger,
    events: Vec<MarketEvent>,
}

/// The peer-to-peer NFT marketplace.
///
/// Holds its own account: buyer payments land there at purchase time and
/// leave it again when sellers withdraw their proceeds.
pub struct Marketplace {
    wallet: Wallet,
    collections: Arc<CollectionClient>,
    bank: Arc<BankClient>,
    state: Mutex<MarketState>,
}

impl Marketplace {
    /// Create a marketplace with a freshly generated account.
    ///
    /// # Errors
    ///
    /// Returns an error if account generation fails.
    pub fn new(collections: Arc<CollectionClient>, bank: Arc<BankClient>) -> Result<Self, MarketError> {
        let wallet = Wallet::generate()?;
        Ok(Self {
            wallet,
            collections,
            bank,
            state: Mutex::new(MarketState::default()),
        })
    }

    /// The marketplace's own account address.
    ///
    /// Token owners approve this address on the collection before listing.
    #[must_use]
    pub fn address(&self) -> &Address {
        self.wallet.address()
    }

    /// List an owned token for sale.
    ///
    /// The caller must own the token, the token must not already be listed,
    /// the price must be positive, and the marketplace must hold transfer
    /// approval for the token.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AlreadyListed`], [`MarketError::NotOwner`],
    /// [`MarketError::PriceMustBeAboveZero`], or
    /// [`MarketError::NotApprovedForMarketplace`].
    pub async fn list_item(
        &self,
        caller: &Address,
        collection: &Address,
        token_id: TokenId,
        price: Amount,
    ) -> Result<(), MarketError> {
        let mut state = self.state.lock().await;

        guards::ensure_not_listed(&state.listings, collection, token_id)?;
        let owner = self.collections.owner_of(collection, token_id).await?;
        guards::ensure_owner(&owner, caller)?;
        guards::ensure_price_above_zero(price)?;
        let approved = self.collections.get_approved(collection, token_id).await?;
        guards::ensure_marketplace_approved(approved.as_ref(), self.wallet.address())?;

        state
            .listings
            .put(collection.clone(), token_id, caller.clone(), price);
        state.events.push(MarketEvent::listed(
            caller.clone(),
            collection.clone(),
            token_id,
            price,
        ));

        info!(collection = %collection, token_id = %token_id, seller = %caller, price = %price, "item listed");
        Ok(())
    }

    /// Cancel an active listing.
    ///
    /// Ownership is re-verified against the collection at cancel time: after
    /// an off-market transfer, only the token's new owner can cancel the
    /// stale listing.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotListed`] or [`MarketError::NotOwner`].
    pub async fn cancel_listing(
        &self,
        caller: &Address,
        collection: &Address,
        token_id: TokenId,
    ) -> Result<(), MarketError> {
        let mut state = self.state.lock().await;

        let listing = guards::ensure_listed(&state.listings, collection, token_id)?.clone();
        let owner = self.collections.owner_of(collection, token_id).await?;
        guards::ensure_owner(&owner, caller)?;

        state.listings.remove(collection, token_id);
        state.events.push(MarketEvent::canceled(
            listing.seller,
            collection.clone(),
            token_id,
        ));

        info!(collection = %collection, token_id = %token_id, "listing canceled");
        Ok(())
    }

    /// Reprice an active listing. The seller is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotListed`], [`MarketError::NotOwner`], or
    /// [`MarketError::PriceMustBeAboveZero`].
    pub async fn update_listing(
        &self,
        caller: &Address,
        collection: &Address,
        token_id: TokenId,
        new_price: Amount,
    ) -> Result<(), MarketError> {
        let mut state = self.state.lock().await;

        let listing = guards::ensure_listed(&state.listings, collection, token_id)?.clone();
        let owner = self.collections.owner_of(collection, token_id).await?;
        guards::ensure_owner(&owner, caller)?;
        guards::ensure_price_above_zero(new_price)?;

        state
            .listings
            .put(collection.clone(), token_id, listing.seller.clone(), new_price);
        state.events.push(MarketEvent::listed(
            listing.seller,
            collection.clone(),
            token_id,
            new_price,
        ));

        info!(collection = %collection, token_id = %token_id, price = %new_price, "listing repriced");
        Ok(())
    }

    /// Buy a listed token.
    ///
    /// The payment must meet the listed price. The full payment is credited
    /// to the seller's proceeds; anything above the price is retained as
    /// additional proceeds, not refunded.
    ///
    /// Order of operations: the payment is collected first, then the listing
    /// is removed and the seller credited, and only then is the asset moved.
    /// A rejected asset transfer aborts the purchase: the listing returns,
    /// the credit is reversed, and the payment refunded.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NotListed`], [`MarketError::PriceNotMet`], or
    /// [`MarketError::TransferFailed`].
    pub async fn buy_item(
        &self,
        buyer: &Wallet,
        collection: &Address,
        token_id: TokenId,
        payment: Amount,
    ) -> Result<(), MarketError> {
        let mut state = self.state.lock().await;

        let listing = guards::ensure_listed(&state.listings, collection, token_id)?.clone();
        if payment < listing.price {
            return Err(MarketError::PriceNotMet {
                collection: collection.clone(),
                token_id,
                price: listing.price,
            });
        }

        self.bank
            .transfer(buyer, self.wallet.address(), payment)
            .await
            .map_err(|e| MarketError::transfer_failed(e.to_string()))?;

        // Effects precede the outbound asset transfer: anything re-entering
        // from here on sees the listing gone and the proceeds credited.
        state.listings.remove(collection, token_id);
        if let Err(e) = state.proceeds.credit(&listing.seller, payment) {
            self.abort_purchase(&mut state, &listing, collection, token_id, buyer, payment, false)
                .await;
            return Err(e);
        }

        if let Err(e) = self
            .collections
            .transfer(
                self.wallet.address(),
                collection,
                &listing.seller,
                buyer.address(),
                token_id,
            )
            .await
        {
            self.abort_purchase(&mut state, &listing, collection, token_id, buyer, payment, true)
                .await;
            return Err(MarketError::transfer_failed(e.to_string()));
        }

        state.events.push(MarketEvent::bought(
            buyer.address().clone(),
            collection.clone(),
            token_id,
            listing.price,
        ));

        info!(
            collection = %collection,
            token_id = %token_id,
            buyer = %buyer.address(),
            price = %listing.price,
            "item bought"
        );
        Ok(())
    }

    /// Withdraw all accumulated proceeds.
    ///
    /// The balance is cleared before the payout is attempted; if the payout
    /// is rejected, the balance is restored in full.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::NoProceeds`] or [`MarketError::TransferFailed`].
    pub async fn withdraw_proceeds(&self, caller: &Address) -> Result<Amount, MarketError> {
        let mut state = self.state.lock().await;

        if state.proceeds.get(caller).is_zero() {
            return Err(MarketError::NoProceeds);
        }
        let amount = state.proceeds.clear(caller);

        if let Err(e) = self.bank.transfer(&self.wallet, caller, amount).await {
            state.proceeds.restore(caller, amount);
            return Err(MarketError::transfer_failed(e.to_string()));
        }

        info!(seller = %caller, amount = %amount, "proceeds withdrawn");
        Ok(amount)
    }

    /// The active listing for a token, if any.
    pub async fn get_listing(&self, collection: &Address, token_id: TokenId) -> Option<Listing> {
        let state = self.state.lock().await;
        state.listings.get(collection, token_id).cloned()
    }

    /// A seller's withdrawable proceeds.
    pub async fn get_proceeds(&self, seller: &Address) -> Amount {
        let state = self.state.lock().await;
        state.proceeds.get(seller)
    }

    /// All notifications recorded so far, in operation order.
    pub async fn events(&self) -> Vec<MarketEvent> {
        let state = self.state.lock().await;
        state.events.clone()
    }

    /// Reverses an aborted purchase: the listing returns, the credit (if it
    /// was made) is taken back, and the collected payment refunded.
    #[allow(clippy::too_many_arguments)]
    async fn abort_purchase(
        &self,
        state: &mut MarketState,
        listing: &Listing,
        collection: &Address,
        token_id: TokenId,
        buyer: &Wallet,
        payment: Amount,
        credited: bool,
    ) {
        state.listings.put(
            collection.clone(),
            token_id,
            listing.seller.clone(),
            listing.price,
        );
        if credited {
            state.proceeds.debit(&listing.seller, payment);
        }
        if let Err(e) = self.bank.transfer(&self.wallet, buyer.address(), payment).await {
            warn!(buyer = %buyer.address(), amount = %payment, error = %e, "refund rejected; payment held by marketplace");
        }
    }
}

#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marketplace")
            .field("address", self.wallet.address())
            .finish_non_exhaustive()
    }
}
