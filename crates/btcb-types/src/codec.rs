//! Strict hexadecimal and decimal text codecs
//!
//! Grammar is checked in full before any value is built. Hex overflow is
//! detected by digit count, decimal overflow by magnitude.

use crate::{FixedUint, ParseError, ParseResult};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Hex digits in a 64-bit work or nonce value
pub const U64_HEX_DIGITS: usize = 16;

fn first_invalid(text: &[u8], accept: impl Fn(&u8) -> bool) -> Option<usize> {
    text.iter().position(|c| !accept(c))
}

impl<const N: usize> FixedUint<N> {
    /// Maximum number of hex digits accepted by [`FixedUint::decode_hex`]
    pub const HEX_DIGITS: usize = N * 2;

    /// Upper bound on decimal digits of any N-byte value (log10(2) ~ 0.30103)
    const DEC_DIGITS_BOUND: usize = N * 8 * 30103 / 100_000 + 1;

    /// Decode 1 to `2 * N` hex digits (either case), zero-left-padded
    pub fn decode_hex(text: &str) -> ParseResult<Self> {
        let digits = text.as_bytes();
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }
        if digits.len() > Self::HEX_DIGITS {
            return Err(ParseError::TooLong {
                max: Self::HEX_DIGITS,
                actual: digits.len(),
            });
        }
        if let Some(position) = first_invalid(digits, u8::is_ascii_hexdigit) {
            return Err(ParseError::InvalidCharacter { position });
        }

        // The padded copy may hold private key text
        let mut padded = Zeroizing::new(vec![b'0'; Self::HEX_DIGITS - digits.len()]);
        padded.extend_from_slice(digits);

        let mut bytes = [0u8; N];
        hex::decode_to_slice(padded.as_slice(), &mut bytes)
            .map_err(|_| ParseError::InvalidCharacter { position: 0 })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Encode as exactly `2 * N` uppercase hex digits
    pub fn encode_hex(&self) -> String {
        hex::encode_upper(self.as_bytes())
    }

    /// Decode a minimal decimal string.
    ///
    /// Rejects empty input, any non-digit (including signs), a leading zero
    /// unless the whole text is `"0"`, and values above 2^BITS - 1.
    pub fn decode_dec(text: &str) -> ParseResult<Self> {
        let digits = text.as_bytes();
        if digits.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(position) = first_invalid(digits, u8::is_ascii_digit) {
            return Err(ParseError::InvalidCharacter { position });
        }
        if digits.len() > 1 && digits[0] == b'0' {
            return Err(ParseError::LeadingZero);
        }
        if digits.len() > Self::DEC_DIGITS_BOUND {
            return Err(ParseError::Overflow);
        }

        let number = BigUint::parse_bytes(digits, 10)
            .ok_or(ParseError::InvalidCharacter { position: 0 })?;
        if number.bits() > Self::BITS as u64 {
            return Err(ParseError::Overflow);
        }
        Ok(Self::from_number(&number))
    }

    /// Encode as a minimal decimal string ("0" for zero)
    pub fn encode_dec(&self) -> String {
        self.number().to_str_radix(10)
    }
}

impl<const N: usize> fmt::Display for FixedUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode_hex())
    }
}

impl<const N: usize> FromStr for FixedUint<N> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_hex(s)
    }
}

impl<const N: usize> Serialize for FixedUint<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedUint<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::decode_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// Parse 1 to 16 hex digits into a `u64` (work and nonce values)
pub fn u64_from_hex(text: &str) -> ParseResult<u64> {
    let digits = text.as_bytes();
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }
    if digits.len() > U64_HEX_DIGITS {
        return Err(ParseError::TooLong {
            max: U64_HEX_DIGITS,
            actual: digits.len(),
        });
    }
    if let Some(position) = first_invalid(digits, u8::is_ascii_hexdigit) {
        return Err(ParseError::InvalidCharacter { position });
    }
    u64::from_str_radix(text, 16).map_err(|_| ParseError::Overflow)
}

/// Format a `u64` as 16 lowercase zero-padded hex digits
pub fn u64_to_hex(value: u64) -> String {
    format!("{:016x}", value)
}
