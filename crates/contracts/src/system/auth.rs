use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::lenient::string_from_any;
use crate::system::roles::Role;

/// Why a credential could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Empty credential")]
    Empty,
    #[error("Malformed credential: expected three segments, got {0}")]
    Segments(usize),
    #[error("Credential payload is not valid base64url: {0}")]
    Encoding(String),
    #[error("Credential payload is not valid JSON: {0}")]
    Claims(String),
}

// ============================================================================
// Sign-in exchange
// ============================================================================

/// Body of `POST /auth`: the identity provider's credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub token: String,
}

/// The backend answers `POST /auth` with the credential either as raw text
/// or as a JSON string literal.
pub fn parse_sign_in_response(body: &str) -> Result<String, CredentialError> {
    let trimmed = body.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim();
    if unquoted.is_empty() {
        return Err(CredentialError::Empty);
    }
    Ok(unquoted.to_string())
}

// ============================================================================
// Claims
// ============================================================================

/// The subset of ID-token claims the console reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaims {
    pub sub: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl CredentialClaims {
    /// `true` once `now_secs` has reached `exp`.
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }

    pub fn seconds_until_expiry(&self, now_secs: i64) -> i64 {
        (self.exp - now_secs).max(0)
    }
}

/// Read the claims of a JWT without checking its signature.
///
/// The backend verifies every request; the console only needs `exp` to know
/// when to drop the session.
pub fn decode_claims(token: &str) -> Result<CredentialClaims, CredentialError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CredentialError::Empty);
    }
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(CredentialError::Segments(segments.len()));
    }
    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| CredentialError::Encoding(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| CredentialError::Claims(e.to_string()))
}

// ============================================================================
// Profile
// ============================================================================

/// Signed-in employee as returned by `GET /user/` (created on first sign-in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "string_from_any")]
    pub employe_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub rol: Role,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.name.trim(), self.family_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!("eyJhbGciOiJSUzI1NiJ9.{}.c2lnbmF0dXJl", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn sign_in_response_accepts_text_and_json_string() {
        assert_eq!(parse_sign_in_response("abc.def.ghi\n").unwrap(), "abc.def.ghi");
        assert_eq!(parse_sign_in_response("\"abc.def.ghi\"").unwrap(), "abc.def.ghi");
        assert_eq!(parse_sign_in_response("  \"\" "), Err(CredentialError::Empty));
    }

    #[test]
    fn decodes_claims() {
        let token = token_with(r#"{"sub":"1081","exp":1700000000,"email":"ana@example.com"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "1081");
        assert_eq!(claims.exp, 1_700_000_000);
        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
        assert_eq!(claims.name, None);
    }

    #[test]
    fn accepts_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE
            .encode(r#"{"sub":"x","exp":10}"#);
        let token = format!("h.{payload}.s");
        assert_eq!(decode_claims(&token).unwrap().exp, 10);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(decode_claims(""), Err(CredentialError::Empty));
        assert_eq!(decode_claims("a.b"), Err(CredentialError::Segments(2)));
        assert!(matches!(decode_claims("a.!!!.c"), Err(CredentialError::Encoding(_))));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("hello"));
        assert!(matches!(decode_claims(&not_json), Err(CredentialError::Claims(_))));
    }

    #[test]
    fn expiry_is_inclusive() {
        let claims = decode_claims(&token_with(r#"{"sub":"x","exp":100}"#)).unwrap();
        assert!(!claims.is_expired_at(99));
        assert!(claims.is_expired_at(100));
        assert_eq!(claims.seconds_until_expiry(40), 60);
        assert_eq!(claims.seconds_until_expiry(500), 0);
    }

    #[test]
    fn profile_from_backend_strings() {
        let json = r#"{"employe_id":"1081","name":"Ana","family_name":"Ruiz","email":"ana@example.com","rol":"3"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.rol, Role::Commercial);
        assert_eq!(profile.display_name(), "Ana Ruiz");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let profile = UserProfile {
            employe_id: "1".into(),
            name: " ".into(),
            family_name: String::new(),
            email: "x@y.z".into(),
            rol: Role::Unassigned,
        };
        assert_eq!(profile.display_name(), "x@y.z");
    }
}
