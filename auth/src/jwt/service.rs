use std::collections::HashMap;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues and verifies time-limited identity tokens.
///
/// The signing secret is passed on every call rather than held, so the
/// caller can fetch it from wherever it is managed. Issuance and
/// verification must use the same secret.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenService;

impl TokenService {
    pub fn new() -> Self {
        Self
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Subject identifier, stored in `sub`
    /// * `aux_claims` - Additional claims flattened into the payload
    /// * `secret` - HMAC signing secret
    /// * `ttl_seconds` - Lifetime; `exp = now + ttl_seconds`
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        aux_claims: HashMap<String, serde_json::Value>,
        secret: &[u8],
        ttl_seconds: i64,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, ttl_seconds).with_extras(aux_claims);
        JwtHandler::new(secret).encode(&claims)
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Token is not a well-formed JWT
    /// * `InvalidSignature` - Signed with a different secret or tampered with
    /// * `TokenExpired` - `exp` is in the past
    /// * `MissingClaim` - `exp` or `sub` is absent
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<Claims, JwtError> {
        let claims: Claims = JwtHandler::new(secret).decode(token)?;

        if claims.sub.is_none() {
            return Err(JwtError::MissingClaim("sub".to_string()));
        }

        Ok(claims)
    }
}
