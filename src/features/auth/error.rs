//! Provider error classification. Raw codes are parsed once, here, into a
//! closed [`AuthErrorKind`]; handlers only match on the kind.

use crate::app_lib::AppError;
use thiserror::Error;

/// Error kinds the UI distinguishes. Everything else is `Unknown` and keeps
/// its raw code and message on the surrounding [`ProviderError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    EmailAlreadyInUse,
    WeakPassword,
    UserNotFound,
    WrongPassword,
    InvalidCredential,
    NetworkRequestFailed,
    Unknown,
}

impl AuthErrorKind {
    /// Maps either an SDK-style code (`auth/email-already-in-use`) or an
    /// Identity Toolkit code (`EMAIL_EXISTS`, optionally followed by
    /// ` : detail`) to a kind.
    pub fn from_code(code: &str) -> Self {
        let code = code.split(" : ").next().unwrap_or_default().trim();
        let code = code.strip_prefix("auth/").unwrap_or(code);

        match code {
            "email-already-in-use" | "EMAIL_EXISTS" => Self::EmailAlreadyInUse,
            "weak-password" | "WEAK_PASSWORD" => Self::WeakPassword,
            "user-not-found" | "EMAIL_NOT_FOUND" => Self::UserNotFound,
            "wrong-password" | "INVALID_PASSWORD" => Self::WrongPassword,
            "invalid-credential" | "INVALID_LOGIN_CREDENTIALS" => Self::InvalidCredential,
            "network-request-failed" => Self::NetworkRequestFailed,
            _ => Self::Unknown,
        }
    }

    /// Canonical SDK-style code.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::WeakPassword => "auth/weak-password",
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::InvalidCredential => "auth/invalid-credential",
            Self::NetworkRequestFailed => "auth/network-request-failed",
            Self::Unknown => "auth/internal-error",
        }
    }
}

/// Failure returned by an [`IdentityProvider`](super::IdentityProvider) call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message} ({code})")]
pub struct ProviderError {
    pub kind: AuthErrorKind,
    /// Code exactly as the provider reported it.
    pub code: String,
    /// Human-readable provider message, shown after the generic prefix for
    /// kinds the UI does not translate.
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            kind: AuthErrorKind::from_code(&code),
            code,
            message: message.into(),
        }
    }

    /// Parses an Identity Toolkit message such as
    /// `WEAK_PASSWORD : Password should be at least 6 characters`.
    /// Without a detail part the code doubles as the message.
    pub fn from_rest_message(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.split_once(" : ") {
            Some((code, detail)) => Self::new(code.trim(), detail.trim()),
            None => Self::new(raw, raw),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::NetworkRequestFailed.code(), message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Unknown.code(), message)
    }
}

impl From<AppError> for ProviderError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Http { message, .. } => Self::from_rest_message(&message),
            AppError::Network(message) | AppError::Timeout(message) => Self::network(message),
            other => Self::internal(other.to_string()),
        }
    }
}
