use thiserror::Error;

/// Error type for JWT operations.
///
/// Verification failures keep their cause for diagnostics; callers that
/// face clients should collapse them into a single unauthorized outcome.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),
}
