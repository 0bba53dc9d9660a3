//! BTCB Types - numeric foundation for the BTCB node
//!
//! This crate has zero dependencies on other btcb crates. It provides:
//!
//! - Fixed-width big-endian integers (128, 256 and 512 bit)
//! - Strict hexadecimal and decimal text codecs
//! - Unit ratios and locale-aware balance formatting
//! - Display configuration and serde adapters
//!
//! # Invariants
//!
//! 1. The byte view of an integer is the big-endian encoding of its numeric view
//! 2. Byte order, numeric order and derived `Ord` all agree
//! 3. Decoders return a complete value or an error, never a partial value
//! 4. Balances are truncated for display, never rounded

pub mod uint;
pub mod codec;
pub mod amount;
pub mod config;
pub mod serde_helpers;
pub mod error;

pub use uint::*;
pub use codec::{u64_from_hex, u64_to_hex, U64_HEX_DIGITS};
pub use amount::*;
pub use config::*;
pub use error::*;

/// Version of the BTCB types schema
pub const TYPES_VERSION: &str = "0.1.0";

/// Ed25519 public key
pub type PublicKey = Uint256;

/// Account identifier (the account's public key)
pub type Account = Uint256;

/// Block hash
pub type BlockHash = Uint256;

/// 256-bit checksum
pub type Checksum = Uint256;

/// Ed25519 signature
pub type Signature = Uint512;
