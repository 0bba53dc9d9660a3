//! Symmetric encryption of stored keys
//!
//! Wallet keys are stored as a 256-bit secret encrypted under a 256-bit key
//! with AES-256 in counter mode. The counter block is the 128-bit `iv` taken
//! as a big-endian number, incremented per 16-byte block.

use crate::keys::RawKey;
use aes::cipher::{KeyIvInit, StreamCipher};
use btcb_types::{Uint128, Uint256};
use zeroize::Zeroizing;

type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

fn apply(data: &[u8; 32], key: &RawKey, iv: &Uint128) -> Zeroizing<[u8; 32]> {
    let mut buffer = Zeroizing::new(*data);
    let mut cipher = Aes256Ctr::new(key.as_bytes().into(), iv.as_bytes().into());
    cipher.apply_keystream(&mut buffer[..]);
    buffer
}

/// Encrypt `cleartext` under `key`
pub fn encrypt(cleartext: &RawKey, key: &RawKey, iv: &Uint128) -> Uint256 {
    tracing::trace!("encrypting key");
    let buffer = apply(cleartext.as_bytes(), key, iv);
    Uint256::from_bytes(*buffer)
}

/// Decrypt `ciphertext` under `key`.
///
/// Counter mode has no integrity check: a wrong key or iv yields a different
/// secret, not an error.
pub fn decrypt(ciphertext: &Uint256, key: &RawKey, iv: &Uint128) -> RawKey {
    tracing::trace!("decrypting key");
    let buffer = apply(ciphertext.as_bytes(), key, iv);
    RawKey::new(Uint256::from_bytes(*buffer))
}

impl RawKey {
    /// Encrypt this secret under `key`
    pub fn encrypt(&self, key: &RawKey, iv: &Uint128) -> Uint256 {
        encrypt(self, key, iv)
    }

    /// Replace this secret with the decryption of `ciphertext`
    pub fn decrypt(&mut self, ciphertext: &Uint256, key: &RawKey, iv: &Uint128) {
        *self = decrypt(ciphertext, key, iv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex256(text: &str) -> Uint256 {
        Uint256::decode_hex(text).unwrap()
    }

    #[test]
    fn test_known_answer() {
        // NIST SP 800-38A F.5.5, CTR-AES256, first two blocks
        let key = RawKey::new(hex256(
            "603DEB1015CA71BE2B73AEF0857D77811F352C073B6108D72D9810A30914DFF4",
        ));
        let iv = Uint128::decode_hex("F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF").unwrap();
        let clear = RawKey::new(hex256(
            "6BC1BEE22E409F96E93D7E117393172AAE2D8A571E03AC9C9EB76FAC45AF8E51",
        ));
        let expected = hex256("601EC313775789A5B7A7F504BBF3D228F443E3CA4D62B59ACA84E990CACAF5C5");

        assert_eq!(encrypt(&clear, &key, &iv), expected);
        assert_eq!(decrypt(&expected, &key, &iv), clear);
    }

    #[test]
    fn test_counter_carries_across_128_bits() {
        // The second block uses iv + 1, which carries out of the low 64 bits
        let key = RawKey::new(Uint256::from(9u8));
        let zero = RawKey::new(Uint256::zero());
        let iv = Uint128::from_u128(u64::MAX as u128);
        let next = Uint128::from_u128(u64::MAX as u128 + 1);

        let keystream = encrypt(&zero, &key, &iv);
        let following = encrypt(&zero, &key, &next);
        assert_eq!(keystream.oword(1), following.oword(0));
    }

    #[test]
    fn test_round_trip() {
        let clear = RawKey::random().unwrap();
        let key = RawKey::random().unwrap();
        let iv = Uint128::from(0x1234_5678u32);

        let encrypted = clear.encrypt(&key, &iv);
        assert_ne!(&encrypted, clear.data());

        let mut decrypted = RawKey::default();
        decrypted.decrypt(&encrypted, &key, &iv);
        assert_eq!(decrypted, clear);
    }

    #[test]
    fn test_deterministic() {
        let clear = RawKey::new(Uint256::from(99u8));
        let key = RawKey::new(Uint256::MAX);
        let iv = Uint128::zero();
        assert_eq!(encrypt(&clear, &key, &iv), encrypt(&clear, &key, &iv));
    }

    #[test]
    fn test_iv_and_key_matter() {
        let clear = RawKey::new(Uint256::from(1u8));
        let key = RawKey::new(Uint256::from(2u8));
        let other_key = RawKey::new(Uint256::from(3u8));
        let iv = Uint128::zero();
        let other_iv = Uint128::from(1u8);

        let base = encrypt(&clear, &key, &iv);
        assert_ne!(base, encrypt(&clear, &key, &other_iv));
        assert_ne!(base, encrypt(&clear, &other_key, &iv));
        assert_ne!(decrypt(&base, &other_key, &iv), clear);
    }

    #[test]
    fn test_zero_key_with_derived_iv() {
        let clear = RawKey::new(Uint256::zero());
        let key = RawKey::new(Uint256::zero());
        let iv = key.data().oword(0);

        let encrypted = encrypt(&clear, &key, &iv);
        // The keystream of an all-zero key is not all zeros
        assert!(!encrypted.is_zero());
        assert_eq!(decrypt(&encrypted, &key, &iv), clear);
    }

    #[test]
    fn test_counter_blocks_differ() {
        // Equal plaintext halves must encrypt differently across the two blocks
        let clear = RawKey::new(Uint256::zero());
        let key = RawKey::new(Uint256::from(5u8));
        let encrypted = encrypt(&clear, &key, &Uint128::zero());
        assert_ne!(encrypted.oword(0), encrypted.oword(1));
    }
}
