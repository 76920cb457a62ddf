use auth::JwtError;
use thiserror::Error;

/// Error for named-secret retrieval.
///
/// Missing, empty, denied and transport failures all collapse into one
/// variant carrying only the secret name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("Secret unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for token issuance and verification
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error(transparent)]
    SecretUnavailable(#[from] SecretError),

    #[error("Token rejected: {0}")]
    InvalidToken(JwtError),

    #[error("Token subject is not a valid username")]
    InvalidSubject,

    #[error("Token issuance failed: {0}")]
    TokenIssueFailed(JwtError),
}
