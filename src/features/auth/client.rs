//! Client wrappers for the Identity Toolkit and Secure Token endpoints.
//! Requests carry passwords or refresh tokens; never log them.

use crate::{
    app_lib::{api, config::AppConfig, AppError},
    features::auth::types::{
        Credentials, OobCodeRequest, OobCodeResponse, PasswordAuthRequest, PasswordAuthResponse,
        RefreshTokenResponse,
    },
};
use url::form_urlencoded;

/// Creates an email/password account and returns its first tokens.
pub async fn sign_up(
    config: &AppConfig,
    credentials: &Credentials,
) -> Result<PasswordAuthResponse, AppError> {
    let url = config.identity_endpoint("accounts:signUp")?;
    api::post_json(&url, &PasswordAuthRequest::new(credentials)).await
}

/// Verifies email and password and returns fresh tokens.
pub async fn sign_in_with_password(
    config: &AppConfig,
    credentials: &Credentials,
) -> Result<PasswordAuthResponse, AppError> {
    let url = config.identity_endpoint("accounts:signInWithPassword")?;
    api::post_json(&url, &PasswordAuthRequest::new(credentials)).await
}

/// Asks the provider to email a password reset link.
pub async fn send_password_reset(config: &AppConfig, email: &str) -> Result<(), AppError> {
    let url = config.identity_endpoint("accounts:sendOobCode")?;
    let _: OobCodeResponse = api::post_json(&url, &OobCodeRequest::password_reset(email)).await?;
    Ok(())
}

/// Exchanges a refresh token for a new id token.
pub async fn refresh_token(
    config: &AppConfig,
    refresh_token: &str,
) -> Result<RefreshTokenResponse, AppError> {
    let url = config.token_endpoint()?;
    let form = form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "refresh_token")
        .append_pair("refresh_token", refresh_token)
        .finish();
    api::post_form(&url, form).await
}
