use std::collections::HashMap;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenService;
use crate::password::PasswordCredential;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Salt used to burn one derivation when the account does not exist.
const ABSENT_ACCOUNT_SALT: &str = "00000000000000000000000000000000";

/// Authentication coordinator combining password verification and token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(),
        }
    }

    /// Hash a new password with a fresh salt for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<PasswordCredential, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored salt and hash.
    ///
    /// An empty password never matches and is reported as invalid credentials.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored salt is unusable or derivation failed
    pub fn verify_password(
        &self,
        password: &str,
        salt: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        match self.password_hasher.matches(password, salt, stored_hash) {
            Ok(true) => Ok(()),
            Ok(false) | Err(PasswordError::EmptyPassword) => {
                Err(AuthenticationError::InvalidCredentials)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Spend one derivation for a login against an account that does not exist.
    ///
    /// Keeps the unknown-account path as slow as a wrong password.
    /// Always returns `InvalidCredentials`.
    pub fn reject_absent_account(&self, password: &str) -> AuthenticationError {
        // Only the time spent matters; the derived key is discarded.
        let _padding = self.password_hasher.derive(password, ABSENT_ACCOUNT_SALT);
        AuthenticationError::InvalidCredentials
    }

    /// Issue a signed token.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(
        &self,
        subject: &str,
        aux_claims: HashMap<String, serde_json::Value>,
        secret: &[u8],
        ttl_seconds: i64,
    ) -> Result<String, JwtError> {
        self.token_service.issue(subject, aux_claims, secret, ttl_seconds)
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str, secret: &[u8]) -> Result<Claims, JwtError> {
        self.token_service.verify(token, secret)
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_verify_password_success() {
        let authenticator = Authenticator::new();

        let credential = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        authenticator
            .verify_password("my_password", &credential.salt, &credential.hash)
            .expect("Verification failed");
    }

    #[test]
    fn test_verify_password_invalid() {
        let authenticator = Authenticator::new();
        let credential = authenticator.hash_password("my_password").unwrap();

        let wrong =
            authenticator.verify_password("wrong_password", &credential.salt, &credential.hash);
        assert!(matches!(wrong, Err(AuthenticationError::InvalidCredentials)));

        let empty = authenticator.verify_password("", &credential.salt, &credential.hash);
        assert!(matches!(empty, Err(AuthenticationError::InvalidCredentials)));
    }

    #[test]
    fn test_reject_absent_account() {
        let authenticator = Authenticator::new();

        assert!(matches!(
            authenticator.reject_absent_account("anything"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_issue_and_validate_token() {
        let authenticator = Authenticator::new();

        let token = authenticator
            .issue_token("user123", HashMap::new(), SECRET, 60)
            .expect("Failed to generate token");

        let decoded = authenticator
            .validate_token(&token, SECRET)
            .expect("Failed to validate token");

        assert_eq!(decoded.sub, Some("user123".to_string()));
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new();

        let result = authenticator.validate_token("invalid.token.here", SECRET);
        assert!(result.is_err());
    }
}
