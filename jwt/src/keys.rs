//! HS256 secret key handling

use crate::error::{JwtError, JwtResult};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Recommended minimum HS256 secret length (256 bits)
pub const RECOMMENDED_HS256_KEY_LEN: usize = 32;

/// Shared HS256 secret, wiped from memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hs256Key(Vec<u8>);

impl Hs256Key {
    /// Wrap a secret.
    ///
    /// Secrets shorter than [`RECOMMENDED_HS256_KEY_LEN`] are accepted but logged.
    ///
    /// # Errors
    /// [`JwtError::InvalidKey`] if the secret is empty.
    pub fn new(secret: impl AsRef<[u8]>) -> JwtResult<Self> {
        let secret = secret.as_ref();
        validate_hmac_key(secret)?;
        if secret.len() < RECOMMENDED_HS256_KEY_LEN {
            tracing::warn!(
                len = secret.len(),
                recommended = RECOMMENDED_HS256_KEY_LEN,
                "HS256 secret is shorter than recommended"
            );
        }
        Ok(Self(secret.to_vec()))
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed key
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Hs256Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Hs256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hs256Key")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// Reject secrets HMAC-SHA256 cannot meaningfully use
pub(crate) fn validate_hmac_key(secret: &[u8]) -> JwtResult<()> {
    if secret.is_empty() {
        return Err(JwtError::invalid_key("HS256 secret must not be empty"));
    }
    Ok(())
}
