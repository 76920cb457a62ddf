use async_trait::async_trait;

use crate::domain::session::errors::SecretError;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::AuthenticatedIdentity;
use crate::domain::user::models::User;

/// Source of named string secrets.
#[async_trait]
pub trait SecretProvider: Send + Sync + 'static {
    /// Fetch the current value of `name`.
    ///
    /// # Errors
    /// * `Unavailable` - Secret missing, empty or unreachable
    async fn fetch_secret(&self, name: &str) -> Result<String, SecretError>;
}

/// Port for session token operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Issue a signed bearer token for a user whose credentials were verified.
    ///
    /// # Errors
    /// * `SecretUnavailable` - Signing secret could not be fetched
    /// * `TokenIssueFailed` - Encoding failed
    async fn issue_token(&self, user: &User) -> Result<String, SessionError>;

    /// Verify a bearer token and extract the caller's identity.
    ///
    /// # Errors
    /// * `SecretUnavailable` - Signing secret could not be fetched
    /// * `InvalidToken` - Malformed, tampered, wrongly signed or expired
    /// * `InvalidSubject` - Subject claim is not a valid username
    async fn verify_token(&self, token: &str) -> Result<AuthenticatedIdentity, SessionError>;
}
