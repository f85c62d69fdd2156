//! Key derivation from a passphrase
//!
//! A passphrase selects the smallest AES key size that holds it: 16, 24, or
//! 32 bytes. The passphrase bytes are copied to the front of a zeroed buffer
//! of that size; passphrases longer than 32 bytes are truncated. The mapping
//! is deterministic, so the same passphrase always yields the same key.
//!
//! This is intentionally not a KDF. Tokens are keyed to the literal
//! passphrase text, and stretching it would change every token ever issued.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use zeroize::Zeroizing;

/// Cipher block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// A derived AES key of one of the three permitted sizes.
///
/// Immutable once derived; every encode/decode call borrows it.
pub struct Key(Cipher);

enum Cipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

/// Derive an AES key from a UTF-8 passphrase.
pub fn derive_key(passphrase: &str) -> Key {
    let raw = passphrase.as_bytes();

    let mut buf = Zeroizing::new([0u8; 32]);
    let used = raw.len().min(buf.len());
    buf[..used].copy_from_slice(&raw[..used]);

    let cipher = match raw.len() {
        0..=16 => Cipher::Aes128(Aes128::new(GenericArray::from_slice(&buf[..16]))),
        17..=24 => Cipher::Aes192(Aes192::new(GenericArray::from_slice(&buf[..24]))),
        _ => Cipher::Aes256(Aes256::new(GenericArray::from_slice(&buf[..32]))),
    };
    Key(cipher)
}

impl Key {
    /// Length of the key material in bytes (16, 24, or 32).
    pub fn key_len(&self) -> usize {
        match self.0 {
            Cipher::Aes128(_) => 16,
            Cipher::Aes192(_) => 24,
            Cipher::Aes256(_) => 32,
        }
    }

    /// Encrypt a single cipher block in place.
    pub(crate) fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Cipher::Aes128(c) => c.encrypt_block(block),
            Cipher::Aes192(c) => c.encrypt_block(block),
            Cipher::Aes256(c) => c.encrypt_block(block),
        }
    }

    /// Decrypt a single cipher block in place.
    pub(crate) fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Cipher::Aes128(c) => c.decrypt_block(block),
            Cipher::Aes192(c) => c.decrypt_block(block),
            Cipher::Aes256(c) => c.decrypt_block(block),
        }
    }
}
