//! BLAKE2b hashing utilities

use blake2::digest::consts::{U32, U5, U64};
use blake2::{Blake2b, Digest};

type Blake2b40 = Blake2b<U5>;
type Blake2b256 = Blake2b<U32>;
type Blake2b512 = Blake2b<U64>;

/// 5-byte BLAKE2b digest, used for account checksums
pub fn blake2b_40(data: &[u8]) -> [u8; 5] {
    Blake2b40::digest(data).into()
}

/// 32-byte BLAKE2b digest of several items
pub fn blake2b_256_all(items: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for item in items {
        hasher.update(item);
    }
    hasher.finalize().into()
}

/// 32-byte BLAKE2b digest
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    blake2b_256_all(&[data])
}

/// 64-byte BLAKE2b digest, used for ed25519 key expansion
pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Blake2b512::digest(data));
    out
}
