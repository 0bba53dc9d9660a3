//! BTCB Crypto - cryptographic primitives for the BTCB node
//!
//! This crate provides:
//! - Account address encoding with BLAKE2b checksums
//! - Private key handling and ed25519 public key derivation
//! - Deterministic key derivation from wallet seeds
//! - AES-256-CTR encryption of stored keys
//!
//! # Security Invariant
//!
//! **Secret key material is zeroed when it goes out of scope.**

pub mod hash;
pub mod account;
pub mod keys;
pub mod cipher;

pub use hash::*;
pub use account::*;
pub use keys::*;
pub use cipher::*;

use btcb_types::ParseError;
use thiserror::Error;

/// Cryptographic errors
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(#[from] ParseError),
}

impl CryptoError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            CryptoError::KeyGenerationFailed(_) => "KEY_GENERATION_FAILED",
            CryptoError::InvalidKeyFormat(_) => "INVALID_KEY_FORMAT",
        }
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;
