//! HS256 token: construction, signing, parsing and verification

use crate::claims::Claims;
use crate::codec::{SEPARATOR, decode_claims, encode_unsigned, split_token};
use crate::crypto::{hs256_signature, verify_hs256};
use crate::error::{JwtError, JwtResult};
use crate::types::JwtHeader;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

/// A JWT with a fixed HS256 header and a mutable claim set.
///
/// ```
/// use simple_jwt::Token;
///
/// let mut token = Token::new();
/// token.set_claim("user", "mrsih");
/// let signed = token.sign("53cr3tk3y")?;
///
/// let parsed = Token::parse(&signed)?;
/// parsed.verify(&signed, "53cr3tk3y")?;
/// assert_eq!(parsed.claim("user"), Some(&serde_json::json!("mrsih")));
/// # Ok::<(), simple_jwt::JwtError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    header: JwtHeader,
    claims: Claims,
}

impl Token {
    /// Token with the default header and no claims
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: JwtHeader::new(),
            claims: Claims::new(),
        }
    }

    /// Token with the default header carrying `claims`
    #[must_use]
    pub fn with_claims(claims: Claims) -> Self {
        Self {
            header: JwtHeader::new(),
            claims,
        }
    }

    /// Header; always `{"alg":"HS256","typ":"JWT"}`
    #[must_use]
    pub fn header(&self) -> &JwtHeader {
        &self.header
    }

    /// Claim set
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Mutable claim set
    pub fn claims_mut(&mut self) -> &mut Claims {
        &mut self.claims
    }

    /// Take the claim set, dropping the header
    #[must_use]
    pub fn into_claims(self) -> Claims {
        self.claims
    }

    /// Insert or overwrite a claim.
    ///
    /// Non-finite floats convert to `null` in `Value::from`; route them through
    /// [`Token::try_set_claim`] to get an error instead.
    pub fn set_claim(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.claims.insert(key, value);
        self
    }

    /// Insert any `Serialize` value as a claim.
    ///
    /// # Errors
    /// [`JwtError::Serialization`] if `value` has no JSON representation (NaN
    /// and infinite floats included); the claim set is left unchanged.
    pub fn try_set_claim<T>(&mut self, key: impl Into<String>, value: &T) -> JwtResult<&mut Self>
    where
        T: Serialize + ?Sized,
    {
        self.claims.insert_serialized(key, value)?;
        Ok(self)
    }

    /// Look up a claim; `None` when absent
    #[must_use]
    pub fn claim(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// Signing input `base64url(header).base64url(claims)`
    ///
    /// # Errors
    /// [`JwtError::Serialization`] if the header or claims cannot be encoded.
    pub fn encode_unsigned(&self) -> JwtResult<String> {
        encode_unsigned(&self.header, &self.claims)
    }

    /// Sign with HMAC-SHA256 and return `header.payload.signature`.
    ///
    /// Deterministic for a given claim set and secret.
    ///
    /// # Errors
    /// [`JwtError::Serialization`] if encoding fails, [`JwtError::InvalidKey`]
    /// if the secret is empty.
    pub fn sign(&self, secret: impl AsRef<[u8]>) -> JwtResult<String> {
        let unsigned = self.encode_unsigned()?;
        let signature = hs256_signature(&unsigned, secret.as_ref())?;
        tracing::debug!(
            claims = self.claims.len(),
            unsigned_len = unsigned.len(),
            "signed HS256 token"
        );
        Ok(format!("{unsigned}{SEPARATOR}{signature}"))
    }

    /// Parse a compact token, keeping only its claims.
    ///
    /// The header segment on the wire is not decoded; the result always carries
    /// the default HS256 header. Parsing does not check the signature, call
    /// [`Token::verify`] before trusting the claims.
    ///
    /// # Errors
    /// [`JwtError::Format`] unless there are exactly three non-empty segments,
    /// [`JwtError::Encoding`] / [`JwtError::Serialization`] for a bad payload.
    pub fn parse(token: &str) -> JwtResult<Self> {
        let [_, payload, _] = split_token(token)?;
        let claims = decode_claims(payload)?;
        tracing::debug!(claims = claims.len(), "parsed token payload");
        Ok(Self::with_claims(claims))
    }

    /// Check that signing this token with `secret` reproduces `token` exactly.
    ///
    /// # Errors
    /// [`JwtError::Verification`] on mismatch; signing errors propagate.
    pub fn verify(&self, token: &str, secret: impl AsRef<[u8]>) -> JwtResult<()> {
        let expected = self.sign(secret)?;
        if verify_hs256(&expected, token) {
            Ok(())
        } else {
            tracing::warn!("token signature mismatch");
            Err(JwtError::Verification)
        }
    }
}

impl FromStr for Token {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Claims> for Token {
    fn from(claims: Claims) -> Self {
        Self::with_claims(claims)
    }
}
