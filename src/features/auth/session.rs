//! Persisted provider session. Only the Firebase provider reads and writes
//! it; the UI never looks at tokens.

use super::types::{PasswordAuthResponse, RefreshTokenResponse, User};
use crate::app_lib::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// `localStorage` key holding the session record.
pub const SESSION_STORAGE_KEY: &str = "doorway.session";

/// Tokens are refreshed this long before they expire.
pub const REFRESH_SKEW_MS: u64 = 30_000;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Unix epoch milliseconds.
    pub expires_at_ms: u64,
}

impl StoredSession {
    pub fn from_password_auth(response: PasswordAuthResponse, now_ms: u64) -> Result<Self, AppError> {
        let expires_at_ms = expiry(&response.expires_in, now_ms)?;
        Ok(Self {
            uid: response.local_id,
            email: response.email,
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_at_ms,
        })
    }

    /// Applies a token refresh. The refresh must belong to the same user.
    pub fn refreshed(&self, response: RefreshTokenResponse, now_ms: u64) -> Result<Self, AppError> {
        if response.user_id != self.uid {
            return Err(AppError::Parse(
                "Token refresh returned a different user.".to_string(),
            ));
        }
        let expires_at_ms = expiry(&response.expires_in, now_ms)?;
        Ok(Self {
            uid: self.uid.clone(),
            email: self.email.clone(),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
            expires_at_ms,
        })
    }

    pub fn needs_refresh(&self, now_ms: u64) -> bool {
        now_ms.saturating_add(REFRESH_SKEW_MS) >= self.expires_at_ms
    }

    pub fn user(&self) -> User {
        User {
            uid: self.uid.clone(),
            email: self.email.clone(),
        }
    }
}

impl fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredSession")
            .field("uid", &self.uid)
            .field("email", &self.email)
            .field("expires_at_ms", &self.expires_at_ms)
            .finish_non_exhaustive()
    }
}

/// What startup restore does with the stored session once a token refresh
/// returns.
#[derive(Debug, PartialEq, Eq)]
pub enum Restore {
    Refreshed(StoredSession),
    Cleared,
    /// A sign-in or sign-out replaced the session while the refresh was in
    /// flight. The newer session wins and the refresh result is dropped.
    Superseded,
}

impl Restore {
    /// Resolves the refresh of `stale` against `current`, the session held
    /// when the refresh returned.
    pub fn resolve(
        stale: &StoredSession,
        current: Option<&StoredSession>,
        refresh: Result<RefreshTokenResponse, AppError>,
        now_ms: u64,
    ) -> Self {
        if current != Some(stale) {
            return Self::Superseded;
        }
        match refresh.and_then(|response| stale.refreshed(response, now_ms)) {
            Ok(session) => Self::Refreshed(session),
            Err(err) => {
                warn!("dropping stored session: {err}");
                Self::Cleared
            }
        }
    }
}

/// `expires_in` is a decimal string of seconds.
fn expiry(expires_in: &str, now_ms: u64) -> Result<u64, AppError> {
    let seconds: u64 = expires_in
        .trim()
        .parse()
        .map_err(|_| AppError::Parse(format!("Invalid token lifetime: {expires_in}")))?;
    Ok(now_ms.saturating_add(seconds.saturating_mul(1_000)))
}

#[cfg(test)]
mod tests {
    use super::{Restore, StoredSession, REFRESH_SKEW_MS};
    use crate::app_lib::AppError;
    use crate::features::auth::types::{PasswordAuthResponse, RefreshTokenResponse};

    const NOW: u64 = 1_700_000_000_000;

    fn sign_in_response(expires_in: &str) -> PasswordAuthResponse {
        PasswordAuthResponse {
            local_id: "uid-1".to_string(),
            email: "a@b.com".to_string(),
            id_token: "idtok-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            expires_in: expires_in.to_string(),
        }
    }

    fn refresh_response(user_id: &str) -> RefreshTokenResponse {
        RefreshTokenResponse {
            id_token: "idtok-2".to_string(),
            refresh_token: "refresh-2".to_string(),
            expires_in: "3600".to_string(),
            user_id: user_id.to_string(),
        }
    }

    #[test]
    fn password_auth_sets_expiry_from_seconds() {
        let session = StoredSession::from_password_auth(sign_in_response("3600"), NOW);
        let session = session.ok();
        assert_eq!(
            session.as_ref().map(|session| session.expires_at_ms),
            Some(NOW + 3_600_000)
        );
        assert_eq!(
            session.map(|session| session.user().email),
            Some("a@b.com".to_string())
        );
    }

    #[test]
    fn invalid_lifetime_is_rejected() {
        let session = StoredSession::from_password_auth(sign_in_response("soon"), NOW);
        assert!(matches!(session, Err(AppError::Parse(_))));
    }

    #[test]
    fn refresh_is_due_within_the_skew() -> anyhow::Result<()> {
        let session = StoredSession::from_password_auth(sign_in_response("3600"), NOW)?;
        assert!(!session.needs_refresh(NOW));
        assert!(!session.needs_refresh(NOW + 3_600_000 - REFRESH_SKEW_MS - 1));
        assert!(session.needs_refresh(NOW + 3_600_000 - REFRESH_SKEW_MS));
        assert!(session.needs_refresh(NOW + 3_600_000));
        Ok(())
    }

    #[test]
    fn refreshed_keeps_identity_and_replaces_tokens() -> anyhow::Result<()> {
        let session = StoredSession::from_password_auth(sign_in_response("3600"), NOW)?;
        let refreshed = session.refreshed(
            RefreshTokenResponse {
                id_token: "id-2".to_string(),
                refresh_token: "refresh-2".to_string(),
                expires_in: "3600".to_string(),
                user_id: "uid-1".to_string(),
            },
            NOW + 7_200_000,
        )?;

        assert_eq!(refreshed.uid, "uid-1");
        assert_eq!(refreshed.email, "a@b.com");
        assert_eq!(refreshed.id_token, "id-2");
        assert_eq!(refreshed.refresh_token, "refresh-2");
        assert_eq!(refreshed.expires_at_ms, NOW + 10_800_000);
        Ok(())
    }

    #[test]
    fn refresh_for_another_user_is_rejected() -> anyhow::Result<()> {
        let session = StoredSession::from_password_auth(sign_in_response("3600"), NOW)?;
        let refreshed = session.refreshed(
            RefreshTokenResponse {
                id_token: "id-2".to_string(),
                refresh_token: "refresh-2".to_string(),
                expires_in: "3600".to_string(),
                user_id: "uid-2".to_string(),
            },
            NOW,
        );
        assert!(refreshed.is_err());
        Ok(())
    }

    #[test]
    fn debug_hides_tokens() -> anyhow::Result<()> {
        let session = StoredSession::from_password_auth(sign_in_response("3600"), NOW)?;
        let rendered = format!("{session:?}");
        assert!(rendered.contains("uid-1"));
        assert!(!rendered.contains("idtok-1"));
        assert!(!rendered.contains("refresh-1"));
        Ok(())
    }

    #[test]
    fn session_round_trips_through_json() -> anyhow::Result<()> {
        let session = StoredSession::from_password_auth(sign_in_response("3600"), NOW)?;
        let decoded: StoredSession = serde_json::from_str(&serde_json::to_string(&session)?)?;
        assert_eq!(decoded, session);
        Ok(())
    }

    #[test]
    fn restore_clears_session_when_refresh_fails() -> anyhow::Result<()> {
        let stale = StoredSession::from_password_auth(sign_in_response("0"), NOW)?;
        let restore = Restore::resolve(
            &stale,
            Some(&stale),
            Err(AppError::Network("offline".to_string())),
            NOW,
        );
        assert_eq!(restore, Restore::Cleared);
        Ok(())
    }

    #[test]
    fn restore_clears_session_refreshed_for_another_user() -> anyhow::Result<()> {
        let stale = StoredSession::from_password_auth(sign_in_response("0"), NOW)?;
        let restore = Restore::resolve(&stale, Some(&stale), Ok(refresh_response("uid-9")), NOW);
        assert_eq!(restore, Restore::Cleared);
        Ok(())
    }

    #[test]
    fn restore_keeps_refreshed_session() -> anyhow::Result<()> {
        let stale = StoredSession::from_password_auth(sign_in_response("0"), NOW)?;
        let restore = Restore::resolve(&stale, Some(&stale), Ok(refresh_response("uid-1")), NOW);
        let session = match restore {
            Restore::Refreshed(session) => session,
            other => anyhow::bail!("expected a refreshed session, got {other:?}"),
        };
        assert_eq!(session.uid, "uid-1");
        assert_eq!(session.id_token, "idtok-2");
        assert!(!session.needs_refresh(NOW));
        Ok(())
    }

    #[test]
    fn restore_leaves_a_session_changed_during_refresh() -> anyhow::Result<()> {
        let stale = StoredSession::from_password_auth(sign_in_response("0"), NOW)?;

        // Signed out while the refresh was pending.
        let restore = Restore::resolve(&stale, None, Ok(refresh_response("uid-1")), NOW);
        assert_eq!(restore, Restore::Superseded);

        // Signed in as someone else while the refresh was pending.
        let mut other = StoredSession::from_password_auth(sign_in_response("3600"), NOW)?;
        other.uid = "uid-2".to_string();
        other.email = "c@d.com".to_string();
        let restore = Restore::resolve(
            &stale,
            Some(&other),
            Err(AppError::Network("offline".to_string())),
            NOW,
        );
        assert_eq!(restore, Restore::Superseded);
        Ok(())
    }
}
