use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use serde_json::Value;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::AuthenticatedIdentity;
use crate::domain::session::models::SessionSettings;
use crate::domain::session::ports::SecretProvider;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;

/// Domain service for issuing and verifying bearer tokens.
///
/// The signing secret is fetched through the provider on every call, so a
/// rotated secret takes effect as soon as the provider returns it.
pub struct SessionService<SP>
where
    SP: SecretProvider + ?Sized,
{
    secret_provider: Arc<SP>,
    authenticator: Arc<Authenticator>,
    settings: SessionSettings,
}

impl<SP> SessionService<SP>
where
    SP: SecretProvider + ?Sized,
{
    pub fn new(
        secret_provider: Arc<SP>,
        authenticator: Arc<Authenticator>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            secret_provider,
            authenticator,
            settings,
        }
    }

    async fn signing_secret(&self) -> Result<String, SessionError> {
        self.secret_provider
            .fetch_secret(&self.settings.secret_name)
            .await
            .map_err(|e| {
                tracing::error!(secret = %self.settings.secret_name, "Signing secret unavailable");
                SessionError::from(e)
            })
    }
}

#[async_trait]
impl<SP> SessionServicePort for SessionService<SP>
where
    SP: SecretProvider + ?Sized,
{
    async fn issue_token(&self, user: &User) -> Result<String, SessionError> {
        let secret = self.signing_secret().await?;

        let mut aux_claims = HashMap::new();
        aux_claims.insert(
            "username".to_string(),
            Value::String(user.username.as_str().to_string()),
        );
        aux_claims.insert(
            "email".to_string(),
            Value::String(user.email.as_str().to_string()),
        );

        let token = self
            .authenticator
            .issue_token(
                user.username.as_str(),
                aux_claims,
                secret.as_bytes(),
                self.settings.token_ttl_seconds,
            )
            .map_err(SessionError::TokenIssueFailed)?;

        tracing::debug!(username = %user.username, "Token issued");
        Ok(token)
    }

    async fn verify_token(&self, token: &str) -> Result<AuthenticatedIdentity, SessionError> {
        let secret = self.signing_secret().await?;

        let claims = self
            .authenticator
            .validate_token(token, secret.as_bytes())
            .map_err(SessionError::InvalidToken)?;

        let username = claims
            .sub
            .clone()
            .ok_or(SessionError::InvalidSubject)
            .and_then(|sub| Username::new(sub).map_err(|_| SessionError::InvalidSubject))?;

        Ok(AuthenticatedIdentity {
            username,
            email: claims.email(),
            expires_at: claims.exp.unwrap_or_default(),
        })
    }
}
