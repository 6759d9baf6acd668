//! JWT cryptographic operations

pub mod hmac_sha256;

pub use hmac_sha256::{hmac_sha256_sign, hs256_signature, verify_hs256};
