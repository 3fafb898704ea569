//! Unverified decoding of compact (`header.payload.signature`) tokens.
//!
//! Nothing here checks signatures or expiry. The decoded claims are only good
//! for display and must never gate access to anything.

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::Value;

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decoded payload of a compact token.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims(Value);

impl Claims {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Text form of a claim; empty strings and non-scalar values count as missing.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// First key in `keys` with a non-empty value.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// A bearer token taken from the request cookies, forwarded verbatim to the remote API.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

pub fn is_compact_token(value: &str) -> bool {
    value.split('.').count() == 3
}

pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let standard: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE.decode(standard.as_bytes()).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let value = serde_json::from_str::<Value>(&text).ok()?;

    Some(Claims(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::json;

    fn token_with_payload(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn rejects_wrong_segment_counts() {
        for input in ["", "abc", "a.b", "a.b.c.d", "....", "a..b.c"] {
            assert!(decode_claims(input).is_none(), "{input:?}");
        }
    }

    #[test]
    fn rejects_payloads_that_are_not_base64_json() {
        assert!(decode_claims("a.!!!notbase64!!!.c").is_none());
        assert!(decode_claims(&token_with_payload("not json")).is_none());
        assert!(decode_claims(&format!("a.{}.c", URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]))).is_none());
        assert!(decode_claims("a..c").is_none());
    }

    #[test]
    fn decodes_url_safe_payload() {
        // "?>?" encodes to bytes that use both url-safe substitutions
        let claims = decode_claims(&token_with_payload(r#"{"sub":"42","note":"?>?>>"}"#)).unwrap();
        assert_eq!(claims.text("sub").as_deref(), Some("42"));
        assert_eq!(claims.get("note"), Some(&json!("?>?>>")));
    }

    #[test]
    fn accepts_padded_payload() {
        let padded = base64::engine::general_purpose::URL_SAFE.encode(r#"{"role":"admin"}"#);
        let claims = decode_claims(&format!("h.{padded}.s")).unwrap();
        assert_eq!(claims.text("role").as_deref(), Some("admin"));
    }

    #[test]
    fn non_object_payload_has_no_claims() {
        let claims = decode_claims(&token_with_payload("[1,2,3]")).unwrap();
        assert!(claims.text("sub").is_none());
        assert!(claims.first_text(&["sub", "_id", "id"]).is_none());
    }

    #[test]
    fn first_text_skips_empty_and_renders_numbers() {
        let claims = decode_claims(&token_with_payload(r#"{"sub":"","_id":null,"id":7}"#)).unwrap();
        assert_eq!(claims.first_text(&["sub", "_id", "id"]).as_deref(), Some("7"));
    }

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken::new("secret.value.here");
        assert_eq!(format!("{token:?}"), "AccessToken(***)");
    }
}
