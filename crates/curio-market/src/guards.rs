//! Access and state guards.
//!
//! Stateless predicates evaluated before any mutation. Existence checks run
//! before ownership checks so a given bad call always fails the same way.

use crate::error::MarketError;
use crate::listing::{Listing, ListingBook};
use curio_nft::TokenId;
use curio_token::{Address, Amount};

/// Fails with [`MarketError::AlreadyListed`] if the token has a listing.
pub fn ensure_not_listed(
    book: &ListingBook,
    collection: &Address,
    token_id: TokenId,
) -> Result<(), MarketError> {
    if book.get(collection, token_id).is_some() {
        return Err(MarketError::AlreadyListed {
            collection: collection.clone(),
            token_id,
        });
    }
    Ok(())
}

/// Fails with [`MarketError::NotListed`] if the token has no listing;
/// returns the listing otherwise.
pub fn ensure_listed<'a>(
    book: &'a ListingBook,
    collection: &Address,
    token_id: TokenId,
) -> Result<&'a Listing, MarketError> {
    book.get(collection, token_id)
        .ok_or_else(|| MarketError::NotListed {
            collection: collection.clone(),
            token_id,
        })
}

/// Fails with [`MarketError::NotOwner`] unless `caller` is the token's
/// current owner as reported by the collection oracle.
pub fn ensure_owner(owner: &Address, caller: &Address) -> Result<(), MarketError> {
    if owner != caller {
        return Err(MarketError::NotOwner);
    }
    Ok(())
}

/// Fails with [`MarketError::PriceMustBeAboveZero`] on a zero price.
pub fn ensure_price_above_zero(price: Amount) -> Result<(), MarketError> {
    if price.is_zero() {
        return Err(MarketError::PriceMustBeAboveZero);
    }
    Ok(())
}

/// Fails with [`MarketError::NotApprovedForMarketplace`] unless the token's
/// approved operator is the marketplace.
pub fn ensure_marketplace_approved(
    approved: Option<&Address>,
    marketplace: &Address,
) -> Result<(), MarketError> {
    if approved != Some(marketplace) {
        return Err(MarketError::NotApprovedForMarketplace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_token::Wallet;
    use test_case::test_case;

    fn address() -> Address {
        Wallet::generate().expect("wallet").address().clone()
    }

    #[test]
    fn not_listed_passes_on_empty_book() {
        let book = ListingBook::new();
        assert!(ensure_not_listed(&book, &address(), TokenId::new(0)).is_ok());
    }

    #[test]
    fn not_listed_fails_on_existing_listing() {
        let mut book = ListingBook::new();
        let collection = address();
        book.put(collection.clone(), TokenId::new(0), address(), Amount::curio(0.1));

        let result = ensure_not_listed(&book, &collection, TokenId::new(0));
        assert!(matches!(result, Err(MarketError::AlreadyListed { .. })));
    }

    #[test]
    fn listed_returns_the_listing() {
        let mut book = ListingBook::new();
        let collection = address();
        let seller = address();
        book.put(collection.clone(), TokenId::new(0), seller.clone(), Amount::curio(0.1));

        let listing = ensure_listed(&book, &collection, TokenId::new(0)).expect("listing");
        assert_eq!(listing.seller, seller);
    }

    #[test]
    fn listed_fails_with_payload_on_empty_book() {
        let book = ListingBook::new();
        let collection = address();

        match ensure_listed(&book, &collection, TokenId::new(7)) {
            Err(MarketError::NotListed {
                collection: c,
                token_id,
            }) => {
                assert_eq!(c, collection);
                assert_eq!(token_id, TokenId::new(7));
            }
            other => panic!("expected NotListed, got {other:?}"),
        }
    }

    #[test]
    fn owner_check_compares_addresses() {
        let owner = address();
        assert!(ensure_owner(&owner, &owner).is_ok());
        assert!(matches!(
            ensure_owner(&owner, &address()),
            Err(MarketError::NotOwner)
        ));
    }

    #[test_case(0, false ; "zero is rejected")]
    #[test_case(1, true ; "single unit passes")]
    #[test_case(100_000_000, true ; "a tenth of a CURIO passes")]
    fn price_guard(units: u64, ok: bool) {
        let result = ensure_price_above_zero(Amount::from_units(units));
        assert_eq!(result.is_ok(), ok);
    }

    #[test]
    fn approval_guard_requires_exact_match() {
        let marketplace = address();
        let someone_else = address();

        assert!(ensure_marketplace_approved(Some(&marketplace), &marketplace).is_ok());
        assert!(matches!(
            ensure_marketplace_approved(None, &marketplace),
            Err(MarketError::NotApprovedForMarketplace)
        ));
        assert!(matches!(
            ensure_marketplace_approved(Some(&someone_else), &marketplace),
            Err(MarketError::NotApprovedForMarketplace)
        ));
    }
}
