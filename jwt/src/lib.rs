//! Compact HS256 JSON Web Tokens
//!
//! This crate provides:
//! - A [`Token`] with a fixed `{"alg":"HS256","typ":"JWT"}` header and free-form claims
//! - Canonical encoding (lexicographically ordered JSON keys, unpadded base64url)
//! - HMAC-SHA256 signing and constant-time verification
//!
//! Parsing never trusts the header on the wire; verification always re-signs with
//! HS256 and compares the result against the supplied token.

pub mod builder;
pub mod claims;
pub mod codec;
pub mod crypto;
mod error;
mod finite;
pub mod keys;
pub mod token;
mod types;

pub use builder::{Hs256Builder, Hs256Jwt, Jwt};
pub use claims::Claims;
pub use error::*;
pub use keys::{Hs256Key, RECOMMENDED_HS256_KEY_LEN};
pub use token::Token;
pub use types::*;

pub use serde_json::Value;
