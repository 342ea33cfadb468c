//! Bank ledger client.
//!
//! Holds account balances for the curio marketplace. Backed by an in-memory
//! ledger; the surface mirrors what a chain-backed implementation would
//! expose (balance queries, payments, test-only faucet funding).

use crate::amount::Amount;
use crate::error::{Result, TokenError};
use crate::transfer::{Transfer, TransferId};
use crate::wallet::{Address, Wallet};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
struct AccountState {
    balance: Amount,
    frozen: bool,
}

#[derive(Debug, Default)]
struct LedgerState {
    accounts: HashMap<String, AccountState>,
    transfers: HashMap<String, Transfer>,
}

/// Client for the currency ledger.
///
/// Cloneable handle over shared ledger state; all operations are applied
/// under one internal lock.
#[derive(Debug, Clone, Default)]
pub struct BankClient {
    state: Arc<Mutex<LedgerState>>,
}

impl BankClient {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the balance of an account. Unknown accounts hold zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn balance(&self, address: &Address) -> Result<Amount> {
        let state = self.state.lock().await;
        Ok(state
            .accounts
            .get(address.as_str())
            .map_or(Amount::ZERO, |a| a.balance))
    }

    /// Credit an account out of thin air (test/dev funding).
    ///
    /// # Errors
    ///
    /// Returns an error if the account is frozen.
    pub async fn faucet(&self, address: &Address, amount: Amount) -> Result<()> {
        let mut state = self.state.lock().await;
        let account = state.accounts.entry(address.as_str().to_string()).or_default();
        if account.frozen {
            return Err(TokenError::AccountFrozen {
                address: address.clone(),
            });
        }
        account.balance = account.balance.saturating_add(amount);

        let mut record = Transfer::faucet(address.clone(), amount);
        record.mark_completed(None);
        state.transfers.insert(record.id.to_string(), record);

        info!(address = %address, amount = %amount, "faucet credit");
        Ok(())
    }

    /// Freeze an account. Frozen accounts can neither send nor receive.
    pub async fn freeze(&self, address: &Address) {
        let mut state = self.state.lock().await;
        state
            .accounts
            .entry(address.as_str().to_string())
            .or_default()
            .frozen = true;
        info!(address = %address, "account frozen");
    }

    /// Unfreeze an account.
    pub async fn unfreeze(&self, address: &Address) {
        let mut state = self.state.lock().await;
        if let Some(account) = state.accounts.get_mut(address.as_str()) {
            account.frozen = false;
        }
        info!(address = %address, "account unfrozen");
    }

    /// Move `amount` from the payer's account to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, either account is frozen, or
    /// the payer's balance is insufficient. A failed transfer leaves the
    /// ledger unchanged.
    pub async fn transfer(&self, from: &Wallet, to: &Address, amount: Amount) -> Result<Transfer> {
        if amount.is_zero() {
            return Err(TokenError::ZeroTransfer);
        }

        let mut state = self.state.lock().await;

        for address in [from.address(), to] {
            if state
                .accounts
                .get(address.as_str())
                .is_some_and(|a| a.frozen)
            {
                return Err(TokenError::AccountFrozen {
                    address: address.clone(),
                });
            }
        }

        let have = state
            .accounts
            .get(from.address().as_str())
            .map_or(Amount::ZERO, |a| a.balance);
        if have < amount {
            return Err(TokenError::insufficient_funds(have, amount));
        }

        let mut record = Transfer::payment(from.address().clone(), to.clone(), amount);
        let signature = bs58::encode(from.sign(record.id.as_str().as_bytes()).to_bytes()).into_string();

        if let Some(account) = state.accounts.get_mut(from.address().as_str()) {
            account.balance = account.balance.saturating_sub(amount);
        }
        let recipient = state.accounts.entry(to.as_str().to_string()).or_default();
        recipient.balance = recipient.balance.saturating_add(amount);

        record.mark_completed(Some(signature));
        let transfer = record.clone();
        state.transfers.insert(record.id.to_string(), record);

        debug!(
            from = %from.address(),
            to = %to,
            amount = %amount,
            "transfer completed"
        );
        Ok(transfer)
    }

    /// Look up a transfer record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no such transfer exists.
    pub async fn get_transfer(&self, id: &TransferId) -> Result<Transfer> {
        let state = self.state.lock().await;
        state
            .transfers
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| TokenError::TransferNotFound { id: id.to_string() })
    }
}
