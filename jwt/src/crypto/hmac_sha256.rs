//! HMAC-SHA256 operations for JWT signing and verification

use crate::codec::base64_url_encode;
use crate::error::{JwtError, JwtResult};
use crate::keys::validate_hmac_key;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 over raw bytes
///
/// # Errors
/// [`JwtError::InvalidKey`] if the secret is empty.
pub fn hmac_sha256_sign(data: &[u8], secret: &[u8]) -> JwtResult<Vec<u8>> {
    validate_hmac_key(secret)?;
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Base64url signature segment for a signing input
///
/// # Errors
/// [`JwtError::InvalidKey`] if the secret is empty.
pub fn hs256_signature(signing_input: &str, secret: &[u8]) -> JwtResult<String> {
    let digest = hmac_sha256_sign(signing_input.as_bytes(), secret)?;
    Ok(base64_url_encode(&digest))
}

/// Compare a recomputed token against a supplied one in constant time.
///
/// Length differences return early; only equal-length inputs are compared
/// byte by byte without short-circuiting.
#[must_use]
pub fn verify_hs256(expected: &str, supplied: &str) -> bool {
    expected.as_bytes().ct_eq(supplied.as_bytes()).into()
}
