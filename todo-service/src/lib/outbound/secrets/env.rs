use std::env;

use async_trait::async_trait;

use crate::domain::session::errors::SecretError;
use crate::domain::session::ports::SecretProvider;

/// Reads each secret from the environment variable of the same name.
///
/// The variable is read on every call, so rotating it in the process
/// environment takes effect immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecretProvider;

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn fetch_secret(&self, name: &str) -> Result<String, SecretError> {
        match env::var(name) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ => Err(SecretError::Unavailable(name.to_string())),
        }
    }
}
