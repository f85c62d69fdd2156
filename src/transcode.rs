//! Transport transcoding between raw bytes and token text
//!
//! Tokens are base64url without padding:
//! - Free of whitespace (including newlines)
//! - Safe to embed in URLs
//! - Safe to pass unescaped in a POSIX shell

use crate::error::{ErrorCategory, ErrorKind, LinkveilError, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode raw bytes as token text.
pub fn to_text(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode token text back to raw bytes.
pub fn from_text(text: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD.decode(text).map_err(|e| {
        LinkveilError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::TransportDecode,
            format!("base64 decoding failed: {}", e),
            e,
        )
    })
}
