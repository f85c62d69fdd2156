//! Link carriers for tokens
//!
//! Veiled links ship their token in an `lk` query parameter; decode accepts
//! either such a link or the bare token text.

use std::borrow::Cow;

use url::Url;

/// Query parameter that carries the token in a veiled link.
pub const TOKEN_PARAM: &str = "lk";

/// Extract the token from a carrier string.
///
/// A carrier that parses as a URL with an `lk` query parameter yields that
/// parameter's value; any other carrier is taken to be the token itself.
pub fn token_of(carrier: &str) -> Cow<'_, str> {
    if let Ok(url) = Url::parse(carrier) {
        if let Some((_, value)) = url.query_pairs().find(|(name, _)| name == TOKEN_PARAM) {
            return Cow::Owned(value.into_owned());
        }
    }
    Cow::Borrowed(carrier)
}

/// Attach `token` to `base` as the `lk` query parameter.
pub fn veil_link(base: &Url, token: &str) -> Url {
    let mut link = base.clone();
    link.query_pairs_mut().append_pair(TOKEN_PARAM, token);
    link
}
