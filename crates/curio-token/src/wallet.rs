//! Account identities for the curio marketplace.
//!
//! Accounts are identified by base58-encoded Ed25519 public keys. A `Wallet`
//! holds the signing half of the keypair and authorizes outgoing payments.

use crate::error::{Result, TokenError};
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A base58-encoded account address (32-byte public key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Parse an address from a base58-encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid base58 or does not decode
    /// to 32 bytes.
    pub fn from_base58(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| TokenError::invalid_address(format!("invalid base58: {e}")))?;
        if bytes.len() != 32 {
            return Err(TokenError::invalid_address(format!(
                "address must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Build an address from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly 32 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(TokenError::invalid_address(format!(
                "address must be 32 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bs58::encode(bytes).into_string()))
    }

    /// Build an address from a 32-byte key.
    #[must_use]
    pub fn from_array(bytes: [u8; 32]) -> Self {
        Self(bs58::encode(bytes).into_string())
    }

    /// The base58-encoded address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An account keypair.
pub struct Wallet {
    signing_key: SigningKey,
    address: Address,
}

impl Wallet {
    /// Generate a new random wallet.
    ///
    /// Key material comes straight from the operating system's CSPRNG rather
    /// than a userspace PRNG seeded from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the derived public key cannot form an address.
    pub fn generate() -> Result<Self> {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        Self::from_secret_key(&secret)
    }

    /// Rebuild a wallet from a 32-byte secret key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not 32 bytes.
    pub fn from_secret_key(secret: &[u8]) -> Result<Self> {
        let secret: [u8; 32] = secret.try_into().map_err(|_| {
            TokenError::wallet_error(format!("secret key must be 32 bytes, got {}", secret.len()))
        })?;
        let signing_key = SigningKey::from_bytes(&secret);
        let address = Address::from_array(*signing_key.verifying_key().as_bytes());
        Ok(Self {
            signing_key,
            address,
        })
    }

    /// The wallet's account address.
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// The public (verifying) key.
    #[must_use]
    pub fn public_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Sign a message.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }
}

#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
