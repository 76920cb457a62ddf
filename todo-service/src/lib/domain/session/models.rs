use crate::domain::user::models::Username;

/// Identity attached to a request after its bearer token verified.
///
/// Never persisted; lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub username: Username,
    pub email: Option<String>,
    pub expires_at: i64,
}

/// Token lifetime and the name of the signing secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub secret_name: String,
    pub token_ttl_seconds: i64,
}
