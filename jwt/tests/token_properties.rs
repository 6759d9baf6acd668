//! Property tests: round-trip, determinism, tamper detection, secret sensitivity

use proptest::prelude::*;
use serde_json::{Map, Value};
use simple_jwt::{Claims, Token};

const BASE64URL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

// Only finite floats: NaN and infinity have no JSON representation.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (prop::num::f64::POSITIVE
            | prop::num::f64::NEGATIVE
            | prop::num::f64::NORMAL
            | prop::num::f64::SUBNORMAL
            | prop::num::f64::ZERO)
            .prop_map(Value::from),
        "\\PC{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn claims() -> impl Strategy<Value = Claims> {
    prop::collection::btree_map("\\PC{1,10}", json_value(), 0..6)
        .prop_map(|m| m.into_iter().collect::<Claims>())
}

// HMAC zero-pads short keys, so trailing NUL bytes would make distinct secrets
// equivalent.
fn secret() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=255, 1..48)
}

proptest! {
    #[test]
    fn parse_recovers_signed_claims(claims in claims(), secret in secret()) {
        let token = Token::with_claims(claims.clone());
        let signed = token.sign(&secret)?;

        let parsed = Token::parse(&signed)?;
        prop_assert_eq!(parsed.claims(), &claims);
        prop_assert!(parsed.verify(&signed, &secret).is_ok());
    }

    #[test]
    fn signing_is_deterministic(claims in claims(), secret in secret()) {
        let token = Token::with_claims(claims);
        prop_assert_eq!(token.sign(&secret)?, token.sign(&secret)?);
    }

    #[test]
    fn any_single_character_change_is_rejected(
        claims in claims(),
        secret in secret(),
        position in any::<prop::sample::Index>(),
        replacement in prop::sample::select(BASE64URL.to_vec()),
    ) {
        let signed = Token::with_claims(claims).sign(&secret)?;
        let mut bytes = signed.clone().into_bytes();
        let at = position.index(bytes.len());
        prop_assume!(bytes[at] != b'.' && bytes[at] != replacement);
        bytes[at] = replacement;
        let tampered = String::from_utf8(bytes)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let outcome = Token::parse(&tampered).and_then(|t| t.verify(&tampered, &secret));
        prop_assert!(outcome.is_err(), "accepted tampered token {}", tampered);
        prop_assert!(outcome.err().is_some_and(|e| e.is_rejection()));
    }

    #[test]
    fn different_secrets_give_different_tokens(
        claims in claims(),
        a in secret(),
        b in secret(),
    ) {
        prop_assume!(a != b);
        prop_assume!(!claims.is_empty());
        let token = Token::with_claims(claims);
        let signed = token.sign(&a)?;
        prop_assert_ne!(&signed, &token.sign(&b)?);
        prop_assert!(token.verify(&signed, &b).is_err());
    }
}
