use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::session::errors::SecretError;
use crate::domain::session::ports::SecretProvider;

/// Fixed name to value map, for development and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticSecretProvider {
    values: HashMap<String, String>,
}

impl StaticSecretProvider {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn with_secret(mut self, name: impl ToString, value: impl ToString) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl SecretProvider for StaticSecretProvider {
    async fn fetch_secret(&self, name: &str) -> Result<String, SecretError> {
        self.values
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
            .ok_or_else(|| SecretError::Unavailable(name.to_string()))
    }
}
