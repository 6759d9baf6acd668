//! HS256 builder entry point

use crate::error::JwtResult;
use crate::keys::Hs256Key;
use crate::token::Token;

/// Builder entry point: `Jwt::hs256().with_secret(..)`
#[derive(Debug, Default)]
pub struct Jwt;

impl Jwt {
    /// HS256 builder
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder
    }
}

/// HS256 builder - initial state
#[derive(Debug, Default)]
pub struct Hs256Builder;

impl Hs256Builder {
    /// Configure the shared secret.
    ///
    /// # Errors
    /// [`crate::JwtError::InvalidKey`] if the secret is empty.
    pub fn with_secret(self, secret: impl AsRef<[u8]>) -> JwtResult<Hs256Jwt> {
        Ok(Hs256Jwt {
            key: Hs256Key::new(secret)?,
        })
    }

    /// Use an already constructed key
    #[must_use]
    pub fn with_key(self, key: Hs256Key) -> Hs256Jwt {
        Hs256Jwt { key }
    }
}

/// HS256 signer and verifier bound to one secret
#[derive(Debug, Clone)]
pub struct Hs256Jwt {
    key: Hs256Key,
}

impl Hs256Jwt {
    /// Sign `token` with the configured secret
    ///
    /// # Errors
    /// See [`Token::sign`].
    pub fn sign(&self, token: &Token) -> JwtResult<String> {
        token.sign(&self.key)
    }

    /// Parse and verify in one step, returning the token only if it is authentic.
    ///
    /// # Errors
    /// Any parse error, or [`crate::JwtError::Verification`] on signature mismatch.
    pub fn verify(&self, token: &str) -> JwtResult<Token> {
        let parsed = Token::parse(token)?;
        parsed.verify(token, &self.key)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn sign_then_verify() -> JwtResult<()> {
        let jwt = Jwt::hs256().with_secret("53cr3tk3y")?;
        let mut token = Token::new();
        token.set_claim("user", "mrsih");

        let signed = jwt.sign(&token)?;
        assert_eq!(signed, token.sign("53cr3tk3y")?);
        assert_eq!(jwt.verify(&signed)?, token);
        Ok(())
    }

    #[test]
    fn verify_with_other_key_is_rejected() -> JwtResult<()> {
        let signer = Jwt::hs256().with_secret("first")?;
        let verifier = Jwt::hs256().with_key(Hs256Key::new("second")?);
        let signed = signer.sign(&Token::new())?;

        let err = verifier.verify(&signed).err();
        assert_eq!(err.as_ref().map(|e| e.kind()), Some(ErrorKind::Verification));
        assert!(err.is_some_and(|e| e.is_rejection()));
        Ok(())
    }

    #[test]
    fn entry_points_are_debug() {
        assert_eq!(format!("{:?}", Jwt::default()), "Jwt");
        assert_eq!(format!("{:?}", Jwt::hs256()), "Hs256Builder");
    }

    #[test]
    fn empty_secret_is_not_a_rejection() {
        let err = Jwt::hs256().with_secret(b"").err();
        assert_eq!(err.as_ref().map(|e| e.kind()), Some(ErrorKind::InvalidKey));
        assert!(!err.is_some_and(|e| e.is_rejection()));
    }
}
