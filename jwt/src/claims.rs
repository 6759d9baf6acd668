//! JWT claim set with typed accessors.

use crate::error::{JwtError, JwtResult};
use crate::finite::ensure_finite;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Claim set carried in the token payload.
///
/// Keys serialize in lexicographic order at every nesting level, which is what
/// makes the encoded payload canonical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Empty claim set
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert or overwrite a claim, returning the previous value.
    ///
    /// `Value::from(f64::NAN)` is already `null` by the time it gets here; use
    /// [`Claims::insert_serialized`] for floats that may be NaN or infinite.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Serialize `value` to JSON and insert it.
    ///
    /// # Errors
    /// Returns [`JwtError::Serialization`] if `value` has no JSON representation
    /// (for example a map with non-string keys, or a NaN or infinite float).
    pub fn insert_serialized<T>(&mut self, key: impl Into<String>, value: &T) -> JwtResult<Option<Value>>
    where
        T: Serialize + ?Sized,
    {
        ensure_finite(value)?;
        let value = serde_json::to_value(value)?;
        Ok(self.0.insert(key.into(), value))
    }

    /// Raw claim lookup; absence is not an error
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a claim is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a claim, returning its value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Number of claims
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the claim set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate claims in key order
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Borrow the underlying JSON object
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap into the underlying JSON object
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// String claim.
    ///
    /// # Errors
    /// [`JwtError::ClaimType`] if the claim exists but is not a string.
    pub fn get_str(&self, key: &str) -> JwtResult<Option<&str>> {
        self.typed(key, "a string", Value::as_str)
    }

    /// Signed integer claim.
    ///
    /// # Errors
    /// [`JwtError::ClaimType`] if the claim exists but does not fit an `i64`.
    pub fn get_i64(&self, key: &str) -> JwtResult<Option<i64>> {
        self.typed(key, "a signed integer", Value::as_i64)
    }

    /// Unsigned integer claim.
    ///
    /// # Errors
    /// [`JwtError::ClaimType`] if the claim exists but does not fit a `u64`.
    pub fn get_u64(&self, key: &str) -> JwtResult<Option<u64>> {
        self.typed(key, "an unsigned integer", Value::as_u64)
    }

    /// Numeric claim as `f64`.
    ///
    /// # Errors
    /// [`JwtError::ClaimType`] if the claim exists but is not a number.
    pub fn get_f64(&self, key: &str) -> JwtResult<Option<f64>> {
        self.typed(key, "a number", Value::as_f64)
    }

    /// Boolean claim.
    ///
    /// # Errors
    /// [`JwtError::ClaimType`] if the claim exists but is not a boolean.
    pub fn get_bool(&self, key: &str) -> JwtResult<Option<bool>> {
        self.typed(key, "a boolean", Value::as_bool)
    }

    /// Deserialize a claim into any `DeserializeOwned` type.
    ///
    /// # Errors
    /// [`JwtError::ClaimType`] if the claim exists but does not deserialize as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> JwtResult<Option<T>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|_| JwtError::claim_type(key, std::any::type_name::<T>())),
        }
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> JwtResult<Option<T>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => extract(value)
                .map(Some)
                .ok_or_else(|| JwtError::claim_type(key, expected)),
        }
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Map<String, Value> {
    fn from(claims: Claims) -> Self {
        claims.0
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Claims {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Claims {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Claims {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn insert_overwrites() {
        let mut claims = Claims::new();
        assert_eq!(claims.insert("user", "a"), None);
        assert_eq!(claims.insert("user", "b"), Some(json!("a")));
        assert_eq!(claims.get("user"), Some(&json!("b")));
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn typed_accessors_distinguish_absent_from_mismatch() {
        let claims: Claims = [("name", json!("ada")), ("age", json!(36)), ("admin", json!(true))]
            .into_iter()
            .collect();

        assert_eq!(claims.get_str("name"), Ok(Some("ada")));
        assert_eq!(claims.get_i64("age"), Ok(Some(36)));
        assert_eq!(claims.get_u64("age"), Ok(Some(36)));
        assert_eq!(claims.get_f64("age"), Ok(Some(36.0)));
        assert_eq!(claims.get_bool("admin"), Ok(Some(true)));
        assert_eq!(claims.get_str("missing"), Ok(None));

        let err = claims.get_i64("name").err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::ClaimType));
        assert!(claims.get_bool("age").is_err());
    }

    #[test]
    fn get_as_deserializes_nested_values() {
        let mut claims = Claims::new();
        claims.insert("roles", json!(["read", "write"]));

        let roles: Option<Vec<String>> = claims.get_as("roles").ok().flatten();
        assert_eq!(roles, Some(vec!["read".to_string(), "write".to_string()]));
        assert!(claims.get_as::<u32>("roles").is_err());
        assert_eq!(claims.get_as::<u32>("nope"), Ok(None));
    }

    #[test]
    fn insert_serialized_rejects_non_string_keys() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], 1);

        let mut claims = Claims::new();
        let err = claims.insert_serialized("bad", &bad).err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Serialization));
        assert!(claims.is_empty());
    }

    #[test]
    fn insert_serialized_rejects_non_finite_floats() {
        let mut claims = Claims::new();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = claims.insert_serialized("x", &bad).err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Serialization));
        }
        let err = claims.insert_serialized("y", &vec![1.0, f64::NAN]).err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Serialization));
        assert!(claims.is_empty());
    }

    #[test]
    fn serializes_keys_sorted() -> Result<(), serde_json::Error> {
        let mut claims = Claims::new();
        claims.insert("zeta", 1);
        claims.insert("alpha", json!({"y": 2, "b": 1}));
        assert_eq!(
            serde_json::to_string(&claims)?,
            r#"{"alpha":{"b":1,"y":2},"zeta":1}"#
        );
        Ok(())
    }
}
