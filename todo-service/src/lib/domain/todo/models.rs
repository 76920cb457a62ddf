use std::fmt;

use crate::domain::todo::errors::TodoIdError;

/// Client-chosen todo identifier taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// # Errors
    /// * `Missing` - Identifier is empty
    pub fn new(id: String) -> Result<Self, TodoIdError> {
        if id.is_empty() {
            return Err(TodoIdError::Missing);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
