//! # curio-nft
//!
//! NFT collection registry for the curio marketplace.
//!
//! This crate provides:
//! - Token identifiers and per-token records (owner, approved operator,
//!   metadata URI)
//! - A collection client exposing the ownership/approval oracle and the
//!   transfer capability the marketplace consumes
//!
//! The marketplace treats collections as an external, already-correct
//! component: it never inspects collection internals, only queries ownership
//! and approvals and instructs transfers it has been approved for.
//!
//! ## Example
//!
//! ```rust,no_run
//! use curio_nft::CollectionClient;
//! use curio_token::Wallet;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collections = CollectionClient::new();
//! let minter = Wallet::generate()?;
//!
//! let collection = collections.create_collection("Pug Pics", "PUG").await;
//! let token_id = collections
//!     .mint(&collection, minter.address(), "ipfs://pug-0")
//!     .await?;
//!
//! let owner = collections.owner_of(&collection, token_id).await?;
//! assert_eq!(&owner, minter.address());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod collection;
pub mod error;
pub mod token;

pub use collection::{CollectionClient, CollectionInfo};
pub use error::{NftError, Result};
pub use token::{TokenId, TokenRecord};
