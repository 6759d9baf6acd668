//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token string is not three non-empty `.`-separated segments
    #[error("invalid token: {0}")]
    Format(String),

    /// A segment is not valid unpadded base64url
    #[error("invalid base64url segment: {0}")]
    Encoding(String),

    /// JSON encoding or decoding failed, or the payload is not a JSON object
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Recomputed signature does not match the supplied token
    #[error("invalid token")]
    Verification,

    /// Secret cannot be used as an HMAC key
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Claim exists but holds a different JSON type than requested
    #[error("claim `{key}` is not {expected}")]
    ClaimType {
        /// Claim name
        key: String,
        /// Requested type
        expected: &'static str,
    },
}

/// Fieldless mirror of [`JwtError`] for diagnostics and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`JwtError::Format`]
    Format,
    /// See [`JwtError::Encoding`]
    Encoding,
    /// See [`JwtError::Serialization`]
    Serialization,
    /// See [`JwtError::Verification`]
    Verification,
    /// See [`JwtError::InvalidKey`]
    InvalidKey,
    /// See [`JwtError::ClaimType`]
    ClaimType,
}

impl JwtError {
    /// Create a format error
    #[inline]
    #[must_use]
    pub fn format(msg: &str) -> Self {
        JwtError::Format(msg.to_string())
    }

    /// Create an encoding error
    #[inline]
    #[must_use]
    pub fn encoding(msg: &str) -> Self {
        JwtError::Encoding(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a claim type mismatch error
    #[inline]
    #[must_use]
    pub fn claim_type(key: &str, expected: &'static str) -> Self {
        JwtError::ClaimType {
            key: key.to_string(),
            expected,
        }
    }

    /// Kind of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            JwtError::Format(_) => ErrorKind::Format,
            JwtError::Encoding(_) => ErrorKind::Encoding,
            JwtError::Serialization(_) => ErrorKind::Serialization,
            JwtError::Verification => ErrorKind::Verification,
            JwtError::InvalidKey(_) => ErrorKind::InvalidKey,
            JwtError::ClaimType { .. } => ErrorKind::ClaimType,
        }
    }

    /// Whether the error means "this token is not trustworthy".
    ///
    /// Parse and verification failures both land here; caller-side mistakes
    /// such as an empty secret or a typed claim lookup do not.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Format
                | ErrorKind::Encoding
                | ErrorKind::Serialization
                | ErrorKind::Verification
        )
    }
}

impl From<base64::DecodeError> for JwtError {
    fn from(err: base64::DecodeError) -> Self {
        JwtError::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(err: serde_json::Error) -> Self {
        JwtError::Serialization(err.to_string())
    }
}
