//! Credential form adapter.

use super::types::Credentials;

/// Raw access to the email and password inputs.
pub trait CredentialSource {
    fn email_value(&self) -> String;
    fn password_value(&self) -> String;
}

/// Reads both fields, trimmed. Format and strength checks are left to the
/// provider.
pub fn read_credentials(source: &impl CredentialSource) -> Credentials {
    Credentials::new(&source.email_value(), &source.password_value())
}

/// Reads only the email field, trimmed.
pub fn read_email(source: &impl CredentialSource) -> String {
    source.email_value().trim().to_string()
}
