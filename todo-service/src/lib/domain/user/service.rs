use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::events::WelcomeNotification;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::NotificationPublisher;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Key derivation runs on the blocking pool so request tasks are never
/// stalled behind it.
pub struct UserService<UR, NP>
where
    UR: UserRepository + ?Sized,
    NP: NotificationPublisher + ?Sized,
{
    repository: Arc<UR>,
    notification_publisher: Arc<NP>,
    authenticator: Arc<Authenticator>,
}

impl<UR, NP> UserService<UR, NP>
where
    UR: UserRepository + ?Sized,
    NP: NotificationPublisher + ?Sized,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `notification_publisher` - Welcome notification channel
    /// * `authenticator` - Password hashing and verification
    pub fn new(
        repository: Arc<UR>,
        notification_publisher: Arc<NP>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            repository,
            notification_publisher,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR, NP> UserServicePort for UserService<UR, NP>
where
    UR: UserRepository + ?Sized,
    NP: NotificationPublisher + ?Sized,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self.repository.exists(&command.username).await? {
            return Err(UserError::UsernameAlreadyExists(
                command.username.as_str().to_string(),
            ));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let credential =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| UserError::Hashing(e.to_string()))?
                .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            username: command.username,
            fullname: command.fullname,
            email: command.email,
            credential,
            created_at: Utc::now(),
        };

        // Conditional write: a concurrent registration that passed the
        // existence check above still loses here.
        let created_user = self.repository.create(user).await?;
        tracing::info!(username = %created_user.username, "User registered");

        // Registration does not depend on the notification being delivered.
        let notification = WelcomeNotification::new(&created_user);
        if let Err(e) = self
            .notification_publisher
            .publish_welcome(&notification)
            .await
        {
            tracing::error!(
                username = %created_user.username,
                error = %e,
                "Failed to publish welcome notification"
            );
        }

        Ok(created_user)
    }

    async fn verify_credentials(&self, command: LoginCommand) -> Result<User, UserError> {
        let user = match Username::new(command.username) {
            Ok(username) => self.repository.find_by_username(&username).await?,
            Err(_) => None,
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let outcome = tokio::task::spawn_blocking(move || match user {
            Some(user) => authenticator
                .verify_password(&password, &user.credential.salt, &user.credential.hash)
                .map(|_| user),
            None => Err(authenticator.reject_absent_account(&password)),
        })
        .await
        .map_err(|e| UserError::Hashing(e.to_string()))?;

        match outcome {
            Ok(user) => Ok(user),
            Err(AuthenticationError::InvalidCredentials) => Err(UserError::InvalidCredentials),
            Err(e) => {
                tracing::error!(error = %e, "Credential verification failed");
                Err(UserError::Hashing(e.to_string()))
            }
        }
    }
}
