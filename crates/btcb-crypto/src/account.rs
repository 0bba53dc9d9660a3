//! Account address encoding
//!
//! An account is `bcb_` followed by 60 base-32 characters: the 256-bit public
//! key behind 4 zero padding bits (52 characters), then a 40-bit BLAKE2b
//! checksum of the key in reverse byte order (8 characters). Groups of 5 bits
//! are emitted most significant first.

use crate::hash::blake2b_40;
use btcb_types::{Account, ParseError, ParseResult, Uint256};

/// Legacy account alphabet, ascending in ASCII
pub const ACCOUNT_ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Canonical account prefix
pub const ACCOUNT_PREFIX: &str = "bcb";

/// Alternative prefix accepted on decode
pub const ACCOUNT_PREFIX_ALT: &str = "btcb";

/// Canonical separator between prefix and body
pub const ACCOUNT_SEPARATOR: char = '_';

/// Characters carrying the key (and padding)
pub const KEY_CHARS: usize = 52;

/// Characters carrying the checksum
pub const CHECKSUM_CHARS: usize = 8;

/// Characters after the separator
pub const ENCODED_CHARS: usize = KEY_CHARS + CHECKSUM_CHARS;

// Encoded order matches numeric order only if the alphabet is sorted
const _: () = {
    let mut i = 1;
    while i < ACCOUNT_ALPHABET.len() {
        assert!(ACCOUNT_ALPHABET[i - 1] < ACCOUNT_ALPHABET[i]);
        i += 1;
    }
};

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ACCOUNT_ALPHABET.len() {
        table[ACCOUNT_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

// 4 unused bits + 4 padding bits, 32 key bytes, 5 checksum bytes
const PACKED_BYTES: usize = 38;
const LEADING_BITS: usize = 4;

fn checksum(key: &Uint256) -> [u8; 5] {
    let mut check = blake2b_40(key.as_bytes());
    check.reverse();
    check
}

fn read_group(packed: &[u8; PACKED_BYTES], index: usize) -> u8 {
    let bit = LEADING_BITS + index * 5;
    let (byte, shift) = (bit / 8, bit % 8);
    let high = packed[byte] as u16;
    let low = packed.get(byte + 1).copied().unwrap_or(0) as u16;
    let window = (high << 8) | low;
    ((window >> (11 - shift)) & 0x1f) as u8
}

fn write_group(packed: &mut [u8; PACKED_BYTES], index: usize, value: u8) {
    let bit = LEADING_BITS + index * 5;
    let (byte, shift) = (bit / 8, bit % 8);
    let window = (value as u16 & 0x1f) << (11 - shift);
    packed[byte] |= (window >> 8) as u8;
    if let Some(next) = packed.get_mut(byte + 1) {
        *next |= window as u8;
    }
}

/// Encode a public key as an account string
pub fn encode_account(key: &Account) -> String {
    let mut packed = [0u8; PACKED_BYTES];
    packed[1..33].copy_from_slice(key.as_bytes());
    packed[33..].copy_from_slice(&checksum(key));

    let mut text = String::with_capacity(ACCOUNT_PREFIX.len() + 1 + ENCODED_CHARS);
    text.push_str(ACCOUNT_PREFIX);
    text.push(ACCOUNT_SEPARATOR);
    for index in 0..ENCODED_CHARS {
        text.push(ACCOUNT_ALPHABET[read_group(&packed, index) as usize] as char);
    }
    text
}

fn prefix_length(text: &[u8]) -> ParseResult<usize> {
    let length = if text.starts_with(ACCOUNT_PREFIX.as_bytes()) {
        ACCOUNT_PREFIX.len()
    } else if text.starts_with(ACCOUNT_PREFIX_ALT.as_bytes()) {
        ACCOUNT_PREFIX_ALT.len()
    } else {
        return Err(ParseError::InvalidPrefix);
    };

    match text.get(length) {
        Some(b'_') | Some(b'-') => Ok(length + 1),
        _ => Err(ParseError::InvalidPrefix),
    }
}

fn decode_account_inner(text: &[u8]) -> ParseResult<Account> {
    let start = prefix_length(text)?;
    let expected = start + ENCODED_CHARS;
    if text.len() != expected {
        return Err(ParseError::InvalidLength {
            expected,
            actual: text.len(),
        });
    }

    let mut packed = [0u8; PACKED_BYTES];
    for (index, character) in text[start..].iter().enumerate() {
        let value = DECODE_TABLE[*character as usize];
        if value == INVALID {
            return Err(ParseError::InvalidCharacter {
                position: start + index,
            });
        }
        write_group(&mut packed, index, value);
    }

    if packed[0] != 0 {
        return Err(ParseError::InvalidPadding);
    }

    let key = Uint256::from_slice(&packed[1..33]);
    if packed[33..] != checksum(&key) {
        return Err(ParseError::ChecksumMismatch);
    }
    Ok(key)
}

/// Decode an account string into its public key.
///
/// Accepts the `bcb` and `btcb` prefixes and either `_` or `-` as the
/// separator.
pub fn decode_account(text: &str) -> ParseResult<Account> {
    decode_account_inner(text.as_bytes()).map_err(|err| {
        tracing::debug!(error = %err, length = text.len(), "rejected account");
        err
    })
}

/// Check whether `text` is a well-formed account with a valid checksum
pub fn is_valid_account(text: &str) -> bool {
    decode_account_inner(text.as_bytes()).is_ok()
}

/// Account text conversions on public keys
pub trait AccountCodec: Sized {
    /// Encode as an account string
    fn to_account(&self) -> String;

    /// Decode from an account string
    fn from_account(text: &str) -> ParseResult<Self>;
}

impl AccountCodec for Uint256 {
    fn to_account(&self) -> String {
        encode_account(self)
    }

    fn from_account(text: &str) -> ParseResult<Self> {
        decode_account(text)
    }
}

/// `#[serde(with = "serde_account")]` for public keys stored as account text
pub mod serde_account {
    use super::{decode_account, encode_account};
    use btcb_types::Account;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Account, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_account(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Account, D::Error> {
        let text = String::deserialize(deserializer)?;
        decode_account(&text).map_err(serde::de::Error::custom)
    }
}
