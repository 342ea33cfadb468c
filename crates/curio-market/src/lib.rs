//! # curio-market
//!
//! Peer-to-peer NFT marketplace protocol for the curio network.
//!
//! This crate provides:
//!
//! - Listing registry keyed by `(collection, token_id)`
//! - Proceeds ledger for withdrawable seller balances
//! - Access and state guards evaluated before every mutation
//! - Marketplace operations: list, cancel, update, buy, withdraw
//!
//! Sellers list an owned token at a price, buyers purchase by paying the
//! price or more, and sale proceeds accumulate until the seller withdraws
//! them. The NFT collection and the currency ledger are external
//! collaborators (`curio-nft`, `curio-token`); the marketplace only queries
//! ownership and approvals and instructs transfers it has been approved for.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod guards;
pub mod listing;
pub mod marketplace;
pub mod proceeds;

pub use error::MarketError;
pub use events::MarketEvent;
pub use listing::{Listing, ListingBook};
pub use marketplace::Marketplace;
pub use proceeds::ProceedsLedger;
