//! Key management for BTCB
//!
//! Private keys live in [`RawKey`], which overwrites its buffer with zeros
//! when dropped, on every exit path. It is deliberately not `Copy`, has no
//! `Display` and no `Serialize`, and its `Debug` output is redacted.

use crate::hash::{blake2b_256_all, blake2b_512};
use crate::{CryptoError, CryptoResult};
use btcb_types::{PublicKey, Uint256};
use ed25519_dalek::hazmat::ExpandedSecretKey;
use ed25519_dalek::VerifyingKey;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A 256-bit secret (private key, seed or wallet key)
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct RawKey {
    data: Uint256,
}

impl RawKey {
    /// Wrap a secret value.
    ///
    /// `Uint256` is `Copy`; clear the caller's copy or use [`RawKey::take`].
    pub fn new(data: Uint256) -> Self {
        Self { data }
    }

    /// Move a secret out of `source`, leaving it zeroed
    pub fn take(source: &mut Uint256) -> Self {
        let key = Self { data: *source };
        source.clear();
        key
    }

    /// Fill a new key from the operating system's CSPRNG
    pub fn random() -> CryptoResult<Self> {
        let mut key = Self::default();
        OsRng
            .try_fill_bytes(key.data.as_bytes_mut())
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        Ok(key)
    }

    /// Parse from hex text (wallet import)
    pub fn from_hex(text: &str) -> CryptoResult<Self> {
        Ok(Self::new(Uint256::decode_hex(text)?))
    }

    /// Borrow the secret value
    pub fn data(&self) -> &Uint256 {
        &self.data
    }

    /// Borrow the secret bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.data.as_bytes()
    }

    /// Overwrite the secret with zeros
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Check if the secret is all zeros
    pub fn is_zero(&self) -> bool {
        self.data.is_zero()
    }
}

impl PartialEq for RawKey {
    // Constant time in the key bytes
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes()
            .iter()
            .zip(other.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl Eq for RawKey {}

impl fmt::Debug for RawKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawKey(<redacted>)")
    }
}

/// Derive the ed25519 public key of a private key.
///
/// The secret is expanded with BLAKE2b-512 rather than SHA-512, as the
/// legacy node does.
pub fn pub_key(prv: &RawKey) -> PublicKey {
    let expanded = Zeroizing::new(blake2b_512(prv.as_bytes()));
    let secret = ExpandedSecretKey::from_bytes(&expanded);
    let verifying = VerifyingKey::from(&secret);
    PublicKey::from_bytes(verifying.to_bytes())
}

/// Derive the `index`-th private key of a wallet seed
pub fn deterministic_key(seed: &RawKey, index: u32) -> RawKey {
    let derived = Zeroizing::new(blake2b_256_all(&[
        &seed.as_bytes()[..],
        &index.to_be_bytes()[..],
    ]));
    RawKey::new(Uint256::from_bytes(*derived))
}

/// A private key and its public key
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Private key
    pub prv: RawKey,
    /// Public key
    pub public: PublicKey,
}

impl KeyPair {
    /// Generate a new random key pair
    pub fn generate() -> CryptoResult<Self> {
        Ok(Self::from_raw(RawKey::random()?))
    }

    /// Create from an existing private key
    pub fn from_raw(prv: RawKey) -> Self {
        let public = pub_key(&prv);
        Self { prv, public }
    }

    /// Create from hex private key text
    pub fn from_hex(text: &str) -> CryptoResult<Self> {
        Ok(Self::from_raw(RawKey::from_hex(text)?))
    }

    /// The account string of the public key
    pub fn account(&self) -> String {
        crate::encode_account(&self.public)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}
