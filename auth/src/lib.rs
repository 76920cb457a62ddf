//! Authentication utilities library
//!
//! Provides the credential lifecycle core used by the todo service:
//! - Salted password key derivation (Argon2id, fixed parameters)
//! - Signed, time-limited JWT issuance and verification (HS256)
//! - Authentication coordination
//!
//! Nothing here performs I/O. Signing secrets are passed in by the caller
//! on every token operation.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let salt = hasher.generate_salt();
//! let hash = hasher.derive("my_password", &salt).unwrap();
//! assert!(hasher.matches("my_password", &salt, &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use std::collections::HashMap;
//!
//! use auth::TokenService;
//!
//! let tokens = TokenService::new();
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let token = tokens.issue("alice", HashMap::new(), secret, 3600).unwrap();
//! let claims = tokens.verify(&token, secret).unwrap();
//! assert_eq!(claims.sub.as_deref(), Some("alice"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenService;
pub use password::DerivationParams;
pub use password::PasswordCredential;
pub use password::PasswordError;
pub use password::PasswordHasher;
