//! Deterministic short token derivation.

use sha1::{Digest, Sha1};

/// Length of the short token in hex characters.
const TOKEN_LENGTH: usize = 16;

/// Derives the short token for a URL.
///
/// Computes the SHA-1 digest of the UTF-8 bytes of `input`, encodes it as
/// lowercase hexadecimal, and truncates to the first 16 characters. Pure and
/// deterministic: the same input always yields the same token.
///
/// Truncation trades collision resistance for short, URL-safe tokens. Tokens
/// are lookup keys, not security material; a collision results in a link
/// mix-up, which the storage uniqueness constraint surfaces as a conflict.
pub fn generate_short_token(input: &str) -> String {
    let digest = Sha1::digest(input.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(TOKEN_LENGTH);
    encoded
}
