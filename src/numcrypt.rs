//! Integer-to-token encryption
//!
//! The value's hex text is encrypted one block at a time, each block in
//! isolation: CBC with the chaining value reset to zero, PKCS#7 fill applied
//! by the primitive, and only the first cipher block of each result kept.
//! The padding-only cipher block that a full final block would produce is
//! discarded on encode and rebuilt on decode from the ciphertext alone (see
//! `recover_block`), which is what keeps every token an exact multiple of
//! the block size without storing any length field.

use num_bigint::BigUint;

use crate::blocks::blocks;
use crate::carrier;
use crate::error::{ErrorCategory, ErrorKind, LinkveilError, Result};
use crate::key::{BLOCK_SIZE, Key};
use crate::transcode;

/// Encode a non-negative integer as a token under `key`.
///
/// Deterministic: the same key and value always produce the same token.
/// There is no chaining between blocks and no nonce; equal values are
/// trivially linkable across tokens.
pub fn encode(key: &Key, value: &BigUint) -> String {
    let plain = value.to_str_radix(16);
    let plain = plain.as_bytes();

    let mut cipher_text = Vec::with_capacity(plain.len() + BLOCK_SIZE);
    for (chunk, _) in blocks(plain, BLOCK_SIZE) {
        cipher_text.extend_from_slice(&encrypt_isolated(key, chunk));
    }

    // A full (or absent) final block leaves no room for the padding signal,
    // so the dedicated padding-only block goes on the end in its place.
    if plain.len() % BLOCK_SIZE == 0 {
        cipher_text.extend_from_slice(&encrypt_isolated(key, &[BLOCK_SIZE as u8; BLOCK_SIZE]));
    }

    transcode::to_text(&cipher_text)
}

/// Decode a token back to the integer it encodes.
///
/// The carrier may be the token itself or a URL holding it in an `lk` query
/// parameter. The scheme is unauthenticated: a wrong key or tampered token
/// normally surfaces as an error, but a successful decode is no proof the
/// token is genuine.
pub fn decode(key: &Key, carrier: &str) -> Result<BigUint> {
    let token = carrier::token_of(carrier);
    if token.is_empty() {
        return Err(LinkveilError::with_kind(
            ErrorCategory::User,
            ErrorKind::EmptyInput,
            "cannot decode an empty token",
        ));
    }

    let cipher_text = transcode::from_text(&token)?;

    let mut plain = Vec::with_capacity(cipher_text.len());
    for (chunk, last) in blocks(&cipher_text, BLOCK_SIZE) {
        let recovered = recover_block(key, chunk)?;
        plain.extend_from_slice(trim_padding(&recovered, last)?);
    }

    BigUint::parse_bytes(&plain, 16).ok_or_else(|| {
        LinkveilError::with_kind(
            ErrorCategory::User,
            ErrorKind::HexParse,
            "recovered plaintext is not hexadecimal text; wrong key or foreign token",
        )
    })
}

/// Encrypt one plaintext chunk in isolation and keep the first cipher block.
///
/// A short chunk is filled to a whole block PKCS#7-style. A full chunk's fill
/// would spill into a second cipher block, which is exactly the block the
/// encoder discards.
fn encrypt_isolated(key: &Key, chunk: &[u8]) -> [u8; BLOCK_SIZE] {
    debug_assert!(chunk.len() <= BLOCK_SIZE);
    let fill = (BLOCK_SIZE - chunk.len()) as u8;
    let mut block = [fill; BLOCK_SIZE];
    block[..chunk.len()].copy_from_slice(chunk);
    key.encrypt_block(&mut block);
    block
}

/// Rebuild the padding-only cipher block the encoder discarded, then decrypt
/// the resulting two-block pair with a zero chaining value.
///
/// The synthetic all-16s block is encrypted chained off the ciphertext block
/// itself, giving E(pad ⊕ C). CBC decryption of [C, E(pad ⊕ C)] XORs C back
/// out of the second block, so it always comes back as the all-16s padding
/// block, bit for bit; only the first block carries data.
fn recover_block(key: &Key, chunk: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    let chunk: &[u8; BLOCK_SIZE] = chunk.try_into().map_err(|_| {
        LinkveilError::with_kind(
            ErrorCategory::User,
            ErrorKind::BlockLength,
            format!(
                "trailing ciphertext block of {} bytes; the token is truncated or foreign",
                chunk.len()
            ),
        )
    })?;

    let mut pad = [BLOCK_SIZE as u8; BLOCK_SIZE];
    xor_in_place(&mut pad, chunk);
    key.encrypt_block(&mut pad);

    let mut first = *chunk;
    key.decrypt_block(&mut first);
    key.decrypt_block(&mut pad);
    xor_in_place(&mut pad, chunk);
    debug_assert_eq!(pad, [BLOCK_SIZE as u8; BLOCK_SIZE]);

    Ok(first)
}

/// Strip the self-described padding from the final block's plaintext.
fn trim_padding(block: &[u8; BLOCK_SIZE], last: bool) -> Result<&[u8]> {
    if !last {
        return Ok(block);
    }

    let n = block[BLOCK_SIZE - 1] as usize;
    if n > BLOCK_SIZE {
        return Err(LinkveilError::with_kind(
            ErrorCategory::User,
            ErrorKind::PaddingLength,
            format!(
                "padding length {} exceeds the block size; wrong key or foreign token",
                n
            ),
        ));
    }
    Ok(&block[..BLOCK_SIZE - n])
}

fn xor_in_place(dst: &mut [u8; BLOCK_SIZE], src: &[u8; BLOCK_SIZE]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
