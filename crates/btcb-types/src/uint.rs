//! Fixed-width unsigned integers
//!
//! A `FixedUint<N>` owns exactly `N` bytes stored big-endian (index 0 is the
//! most significant byte). The arbitrary-precision numeric view is produced
//! and consumed by pure conversions, so the byte buffer is the only storage
//! and no two views ever alias it.
//!
//! Because storage is big-endian, the derived lexicographic ordering of the
//! byte array is the numeric ordering.

use num_bigint::BigUint;
use std::fmt;
use std::ops::{BitXor, BitXorAssign};
use zeroize::Zeroize;

/// Unsigned integer of `N * 8` bits backed by a big-endian byte array
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedUint<const N: usize> {
    bytes: [u8; N],
}

/// 128-bit value (amounts, cipher ivs)
pub type Uint128 = FixedUint<16>;

/// 256-bit value (keys, accounts, hashes)
pub type Uint256 = FixedUint<32>;

/// 512-bit value (signatures, wide digests)
pub type Uint512 = FixedUint<64>;

impl<const N: usize> FixedUint<N> {
    /// Number of bytes in the value
    pub const BYTES: usize = N;

    /// Number of bits in the value
    pub const BITS: usize = N * 8;

    /// All bits clear
    pub const ZERO: Self = Self { bytes: [0; N] };

    /// All bits set (2^BITS - 1)
    pub const MAX: Self = Self { bytes: [0xff; N] };

    /// Create a zero value
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create from big-endian bytes
    pub const fn from_bytes(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Create from a big-endian slice of any length.
    ///
    /// Shorter input is right-aligned (zero-extended on the left); longer
    /// input keeps only its low-order `N` bytes.
    pub fn from_slice(slice: &[u8]) -> Self {
        let mut bytes = [0u8; N];
        if slice.len() >= N {
            bytes.copy_from_slice(&slice[slice.len() - N..]);
        } else {
            bytes[N - slice.len()..].copy_from_slice(slice);
        }
        Self { bytes }
    }

    /// Create from the numeric view, reduced modulo 2^BITS
    pub fn from_number(number: &BigUint) -> Self {
        Self::from_slice(&number.to_bytes_be())
    }

    /// The arbitrary-precision numeric view
    pub fn number(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Borrow the big-endian bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Mutably borrow the big-endian bytes
    pub fn as_bytes_mut(&mut self) -> &mut [u8; N] {
        &mut self.bytes
    }

    /// Copy out the big-endian bytes
    pub fn to_bytes(&self) -> [u8; N] {
        self.bytes
    }

    /// Read a single byte (0 = most significant).
    ///
    /// Panics if `index >= N`, like array indexing.
    pub fn byte(&self, index: usize) -> u8 {
        self.bytes[index]
    }

    /// Write a single byte (0 = most significant)
    pub fn set_byte(&mut self, index: usize, value: u8) {
        self.bytes[index] = value;
    }

    /// Read the `index`-th 32-bit chunk, chunk 0 being the most significant
    pub fn dword(&self, index: usize) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[index * 4..(index + 1) * 4]);
        u32::from_be_bytes(word)
    }

    /// Overwrite the `index`-th 32-bit chunk
    pub fn set_dword(&mut self, index: usize, value: u32) {
        self.bytes[index * 4..(index + 1) * 4].copy_from_slice(&value.to_be_bytes());
    }

    /// Read the `index`-th 64-bit chunk, chunk 0 being the most significant
    pub fn qword(&self, index: usize) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.bytes[index * 8..(index + 1) * 8]);
        u64::from_be_bytes(word)
    }

    /// Overwrite the `index`-th 64-bit chunk
    pub fn set_qword(&mut self, index: usize, value: u64) {
        self.bytes[index * 8..(index + 1) * 8].copy_from_slice(&value.to_be_bytes());
    }

    /// Read the `index`-th 128-bit chunk, chunk 0 being the most significant
    pub fn oword(&self, index: usize) -> Uint128 {
        Uint128::from_slice(&self.bytes[index * 16..(index + 1) * 16])
    }

    /// Overwrite the `index`-th 128-bit chunk
    pub fn set_oword(&mut self, index: usize, value: &Uint128) {
        self.bytes[index * 16..(index + 1) * 16].copy_from_slice(value.as_bytes());
    }

    /// Check if every byte is zero
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|b| *b == 0)
    }

    /// Overwrite every byte with zero
    pub fn clear(&mut self) {
        self.bytes.zeroize();
    }
}

impl FixedUint<16> {
    /// Create from a native 128-bit integer
    pub const fn from_u128(value: u128) -> Self {
        Self {
            bytes: value.to_be_bytes(),
        }
    }

    /// Convert to a native 128-bit integer
    pub const fn to_u128(&self) -> u128 {
        u128::from_be_bytes(self.bytes)
    }
}

impl<const N: usize> Default for FixedUint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Zeroize for FixedUint<N> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

macro_rules! impl_from_native {
    ($($native:ty),*) => {
        $(
            impl<const N: usize> From<$native> for FixedUint<N> {
                fn from(value: $native) -> Self {
                    Self::from_slice(&value.to_be_bytes())
                }
            }
        )*
    };
}

impl_from_native!(u8, u16, u32, u64, u128);

impl<const N: usize> From<[u8; N]> for FixedUint<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self { bytes }
    }
}

impl<const N: usize> From<&BigUint> for FixedUint<N> {
    fn from(number: &BigUint) -> Self {
        Self::from_number(number)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedUint<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> BitXor for FixedUint<N> {
    type Output = Self;

    fn bitxor(mut self, other: Self) -> Self::Output {
        self ^= other;
        self
    }
}

impl<const N: usize> BitXorAssign for FixedUint<N> {
    fn bitxor_assign(&mut self, other: Self) {
        for (lhs, rhs) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *lhs ^= rhs;
        }
    }
}

impl<const N: usize> fmt::Debug for FixedUint<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint{}(0x{})", Self::BITS, self.encode_hex())
    }
}
