//! Compact JWT encoding: base64url segments over canonical JSON

use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use crate::types::JwtHeader;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;
use serde_json::Value;

/// Segment separator in the compact form
pub const SEPARATOR: char = '.';

/// Base64 URL-safe encoding without padding (RFC 4648 §5)
#[inline]
#[must_use]
pub fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64 URL-safe decoding without padding (RFC 4648 §5)
///
/// # Errors
/// [`JwtError::Encoding`] on characters outside the alphabet, padding, or a
/// truncated final quantum.
#[inline]
pub fn base64_url_decode(input: &str) -> JwtResult<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(input)?)
}

fn encode_segment<T: Serialize>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(value)?;
    Ok(base64_url_encode(&json))
}

/// Build the signing input `base64url(header).base64url(claims)`.
///
/// # Errors
/// [`JwtError::Serialization`] if either part has no JSON representation.
pub fn encode_unsigned(header: &JwtHeader, claims: &Claims) -> JwtResult<String> {
    let header_b64 = encode_segment(header)?;
    let claims_b64 = encode_segment(claims)?;
    Ok(format!("{header_b64}{SEPARATOR}{claims_b64}"))
}

/// Decode a payload segment into a claim set.
///
/// # Errors
/// [`JwtError::Encoding`] if the segment is not base64url,
/// [`JwtError::Serialization`] if the bytes are not JSON or not a JSON object.
pub fn decode_claims(segment: &str) -> JwtResult<Claims> {
    let bytes = base64_url_decode(segment)?;
    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(map) => Ok(Claims::from(map)),
        other => Err(JwtError::Serialization(format!(
            "payload must be a JSON object, found {}",
            json_type_name(&other)
        ))),
    }
}

/// Split a compact token into its three segments.
///
/// # Errors
/// [`JwtError::Format`] unless there are exactly three non-empty segments.
pub fn split_token(token: &str) -> JwtResult<[&str; 3]> {
    let mut parts = token.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok([header, payload, signature])
        }
        _ => Err(JwtError::format(&format!(
            "expected 3 non-empty segments, got {}",
            token.split(SEPARATOR).filter(|s| !s.is_empty()).count()
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
