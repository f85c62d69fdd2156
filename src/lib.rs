//! Linkveil - Passphrase-veiled integer link tokens
//!
//! Turns an arbitrary-precision non-negative integer into a short, opaque,
//! URL-safe token and back, under an AES key derived from a passphrase.

#![forbid(unsafe_code)]

pub mod blocks;
pub mod carrier;
pub mod error;
pub mod key;
pub mod numcrypt;
pub mod passphrase;
pub mod transcode;
