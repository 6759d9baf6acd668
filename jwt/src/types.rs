//! JWT type definitions

use serde::Serialize;
use serde_json::{Map, Value};

/// The only signing algorithm this crate produces or accepts
pub const ALGORITHM: &str = "HS256";

/// Value of the `typ` header field
pub const TOKEN_TYPE: &str = "JWT";

/// JWT header.
///
/// Always holds exactly `alg = "HS256"` and `typ = "JWT"`. There is no public
/// mutator, and parsed tokens get a fresh header rather than the one on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JwtHeader(Map<String, Value>);

impl JwtHeader {
    /// Fixed HS256 header
    #[must_use]
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("alg".to_string(), Value::from(ALGORITHM));
        fields.insert("typ".to_string(), Value::from(TOKEN_TYPE));
        Self(fields)
    }

    /// Look up a header field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `alg` field
    #[must_use]
    pub fn alg(&self) -> &str {
        self.0.get("alg").and_then(Value::as_str).unwrap_or(ALGORITHM)
    }

    /// `typ` field
    #[must_use]
    pub fn typ(&self) -> &str {
        self.0.get("typ").and_then(Value::as_str).unwrap_or(TOKEN_TYPE)
    }

    /// Number of header fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_fixed_fields() {
        let header = JwtHeader::new();
        assert_eq!(header.alg(), "HS256");
        assert_eq!(header.typ(), "JWT");
        assert_eq!(header.len(), 2);
    }

    #[test]
    fn header_serializes_in_canonical_order() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&JwtHeader::default())?;
        assert_eq!(json, r#"{"alg":"HS256","typ":"JWT"}"#);
        Ok(())
    }
}
