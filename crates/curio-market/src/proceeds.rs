//! Proceeds ledger.
//!
//! Keyed store of withdrawable seller balances. Entries are created on first
//! credit and zeroed on withdrawal, never deleted.

use crate::error::MarketError;
use curio_token::{Address, Amount};
use std::collections::HashMap;

/// Withdrawable balances per seller.
#[derive(Debug, Default)]
pub struct ProceedsLedger {
    balances: HashMap<Address, Amount>,
}

impl ProceedsLedger {
    /// Creates a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of a seller. Unknown sellers hold zero.
    #[must_use]
    pub fn get(&self, seller: &Address) -> Amount {
        self.balances.get(seller).copied().unwrap_or(Amount::ZERO)
    }

    /// Adds `amount` to a seller's balance.
    ///
    /// # Errors
    ///
    /// Fails if `amount` is zero or the balance would overflow; the ledger
    /// is unchanged on failure.
    pub fn credit(&mut self, seller: &Address, amount: Amount) -> Result<(), MarketError> {
        if amount.is_zero() {
            return Err(MarketError::ZeroCredit);
        }
        let current = self.get(seller);
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| MarketError::ProceedsOverflow {
                seller: seller.clone(),
            })?;
        self.balances.insert(seller.clone(), updated);
        Ok(())
    }

    /// Atomically reads and zeroes a seller's balance, returning the
    /// previous value. Used exclusively by withdrawal.
    pub fn clear(&mut self, seller: &Address) -> Amount {
        self.balances
            .insert(seller.clone(), Amount::ZERO)
            .unwrap_or(Amount::ZERO)
    }

    /// Sum of all balances currently held.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.balances
            .values()
            .fold(Amount::ZERO, |acc, b| acc.saturating_add(*b))
    }

    /// Puts back a balance removed by an aborted withdrawal.
    ///
    /// Infallible by construction: the entry was just cleared of at least
    /// `amount`, so no overflow is possible.
    pub(crate) fn restore(&mut self, seller: &Address, amount: Amount) {
        let current = self.get(seller);
        self.balances
            .insert(seller.clone(), current.saturating_add(amount));
    }

    /// Reverses a credit made by an aborted purchase.
    pub(crate) fn debit(&mut self, seller: &Address, amount: Amount) {
        let current = self.get(seller);
        self.balances
            .insert(seller.clone(), current.saturating_sub(amount));
    }
}
