//! # curio-token
//!
//! CURIO currency primitives for the curio NFT marketplace.
//!
//! This crate provides:
//! - Fixed-point currency amounts (integer base units, no floating point in
//!   accounting paths)
//! - Account identities (base58 addresses) and wallets (Ed25519 keypairs)
//! - Transfer records
//! - A bank ledger client holding account balances
//!
//! ## Currency Details
//!
//! - **Name**: CURIO
//! - **Decimals**: 9 (1 CURIO = `1_000_000_000` base units)
//! - **Use**: Payment for NFT purchases and seller proceeds withdrawals
//!
//! ## Example
//!
//! ```rust,no_run
//! use curio_token::{Amount, BankClient, Wallet};
//!
//! # async fn example() -> curio_token::Result<()> {
//! let payer = Wallet::generate()?;
//! let payee = Wallet::generate()?;
//!
//! let bank = BankClient::new();
//! bank.faucet(payer.address(), Amount::curio(10.0)).await?;
//! bank.transfer(&payer, payee.address(), Amount::curio(2.5)).await?;
//!
//! let balance = bank.balance(payee.address()).await?;
//! println!("balance: {balance}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod bank;
pub mod error;
pub mod transfer;
pub mod wallet;

pub use amount::Amount;
pub use bank::BankClient;
pub use error::{Result, TokenError};
pub use transfer::{Transfer, TransferId, TransferKind, TransferStatus};
pub use wallet::{Address, Wallet};

/// CURIO decimals.
pub const CURIO_DECIMALS: u8 = 9;

/// One CURIO in base units.
pub const UNITS_PER_CURIO: u64 = 1_000_000_000;
