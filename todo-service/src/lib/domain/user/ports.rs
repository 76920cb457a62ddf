use async_trait::async_trait;

use crate::domain::user::events::WelcomeNotification;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::NotificationError;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated details.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, password, full name and email
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Hashing` - Password derivation failed
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Check a username and password pair.
    ///
    /// # Returns
    /// The matching user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password, indistinguishably
    /// * `DatabaseError` - Store operation failed
    async fn verify_credentials(&self, command: LoginCommand) -> Result<User, UserError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Check whether a username is registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn exists(&self, username: &Username) -> Result<bool, UserError>;

    /// Persist a new user if, and only if, the username is free.
    ///
    /// The check and the write happen atomically in the store.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - A record already exists for this username
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}

/// Outbound channel for user notifications.
#[async_trait]
pub trait NotificationPublisher: Send + Sync + 'static {
    /// Dispatch a welcome notification.
    ///
    /// # Errors
    /// * `SerializationFailed` - Notification could not be encoded
    /// * `PublishFailed` - The channel rejected or failed to accept it
    async fn publish_welcome(
        &self,
        notification: &WelcomeNotification,
    ) -> Result<(), NotificationError>;
}
