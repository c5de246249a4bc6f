//! Session and credential types plus the Identity Toolkit payloads. Request
//! payloads carry passwords and responses carry tokens, so none of them
//! derive `Debug`.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signed-in user as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: String,
}

/// Trimmed form input for email/password operations.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    /// Builds credentials from raw field values, trimming both.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: SecretString::from(password.trim().to_string()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// True when both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.expose_secret().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body for `accounts:signUp` and `accounts:signInWithPassword`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

impl<'a> PasswordAuthRequest<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password().expose_secret(),
            return_secure_token: true,
        }
    }
}

/// Response of `accounts:signUp` and `accounts:signInWithPassword`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
}

/// Body for `accounts:sendOobCode`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OobCodeRequest<'a> {
    pub request_type: &'static str,
    pub email: &'a str,
}

impl<'a> OobCodeRequest<'a> {
    pub fn password_reset(email: &'a str) -> Self {
        Self {
            request_type: "PASSWORD_RESET",
            email,
        }
    }
}

/// Response of `accounts:sendOobCode`; only the echoed email is kept.
#[derive(Deserialize)]
pub struct OobCodeResponse {
    #[serde(default)]
    pub email: String,
}

/// Response of the Secure Token `token` endpoint.
#[derive(Deserialize)]
pub struct RefreshTokenResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    pub user_id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts `error.message` from a Google API error body.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let message = envelope.error.message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{error_message_from_body, Credentials, OobCodeRequest, PasswordAuthRequest};
    use secrecy::ExposeSecret;
    use serde_json::json;

    #[test]
    fn credentials_trim_both_fields() {
        let credentials = Credentials::new("  a@b.com \n", " 123456 ");
        assert_eq!(credentials.email(), "a@b.com");
        assert_eq!(credentials.password().expose_secret(), "123456");
        assert!(credentials.is_complete());
    }

    #[test]
    fn whitespace_only_fields_are_incomplete() {
        assert!(!Credentials::new("   ", "123456").is_complete());
        assert!(!Credentials::new("a@b.com", "   ").is_complete());
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("a@b.com", "hunter22"));
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn password_request_uses_camel_case() {
        let credentials = Credentials::new("a@b.com", "123456");
        let value = serde_json::to_value(PasswordAuthRequest::new(&credentials)).ok();
        assert_eq!(
            value,
            Some(json!({
                "email": "a@b.com",
                "password": "123456",
                "returnSecureToken": true
            }))
        );
    }

    #[test]
    fn reset_request_sets_request_type() {
        let value = serde_json::to_value(OobCodeRequest::password_reset("a@b.com")).ok();
        assert_eq!(
            value,
            Some(json!({ "requestType": "PASSWORD_RESET", "email": "a@b.com" }))
        );
    }

    #[test]
    fn error_message_is_read_from_envelope() {
        let body = r#"{"error":{"code":400,"message":"WEAK_PASSWORD : Password should be at least 6 characters","errors":[]}}"#;
        assert_eq!(
            error_message_from_body(body).as_deref(),
            Some("WEAK_PASSWORD : Password should be at least 6 characters")
        );
    }

    #[test]
    fn non_envelope_bodies_are_ignored() {
        assert_eq!(error_message_from_body("<html>502</html>"), None);
        assert_eq!(error_message_from_body(r#"{"error":{"message":"  "}}"#), None);
    }
}
