//! Tests for access token expiry checks

use chrono::{DateTime, Utc};
use serde_json::json;
use tokenkit_jwt::{
    decode_claims, is_access_token_expired, is_access_token_expired_with, Clock, UnverifiedDecoder,
};

/// Clock pinned to a known instant.
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn token_with_claims(claims: &serde_json::Value) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(b"test-secret"),
    )
    .expect("token encoding")
}

#[test]
fn token_expired_an_hour_ago_reports_expired() {
    let token = token_with_claims(&json!({
        "sub": "user-1",
        "exp": Utc::now().timestamp() - 3600,
    }));

    assert!(is_access_token_expired(&token).unwrap());
}

#[test]
fn token_expiring_in_an_hour_reports_not_expired() {
    let token = token_with_claims(&json!({
        "sub": "user-1",
        "exp": Utc::now().timestamp() + 3600,
    }));

    assert!(!is_access_token_expired(&token).unwrap());
}

#[test]
fn token_without_exp_reports_not_expired() {
    let token = token_with_claims(&json!({ "sub": "user-1" }));

    assert!(!is_access_token_expired(&token).unwrap());
}

#[test]
fn non_numeric_exp_reports_not_expired() {
    let token = token_with_claims(&json!({ "exp": "tomorrow" }));

    assert!(!is_access_token_expired(&token).unwrap());
}

#[test]
fn malformed_token_propagates_the_decode_error() {
    assert!(is_access_token_expired("not-a-token").is_err());
    assert!(is_access_token_expired("still.not-a-token").is_err());
    assert!(is_access_token_expired("!!!.###.???").is_err());
}

#[test]
fn signature_is_not_consulted() {
    let token = token_with_claims(&json!({
        "exp": Utc::now().timestamp() - 3600,
    }));

    // Same header and payload, garbage signature
    let mut parts: Vec<&str> = token.split('.').collect();
    parts[2] = "AAAA";
    let tampered = parts.join(".");

    assert!(is_access_token_expired(&tampered).unwrap());
}

#[test]
fn expiry_boundary_is_strict() {
    let exp = 1_700_000_000_i64;
    let token = token_with_claims(&json!({ "exp": exp }));

    // Exactly at the expiry instant: not yet expired
    let at_expiry = FixedClock(DateTime::from_timestamp(exp, 0).unwrap());
    assert!(!is_access_token_expired_with(&UnverifiedDecoder, &at_expiry, &token).unwrap());

    // One millisecond later: expired
    let just_past = FixedClock(DateTime::from_timestamp_millis(exp * 1000 + 1).unwrap());
    assert!(is_access_token_expired_with(&UnverifiedDecoder, &just_past, &token).unwrap());
}

#[test]
fn decode_claims_surfaces_the_payload() {
    let token = token_with_claims(&json!({
        "sub": "user-1",
        "exp": 1_700_000_000,
    }));

    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.get("sub").and_then(|v| v.as_str()), Some("user-1"));
    assert_eq!(claims.exp(), Some(1_700_000_000.0));
    assert_eq!(
        claims.expires_at().map(|at| at.timestamp()),
        Some(1_700_000_000)
    );
}
