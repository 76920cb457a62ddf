use async_trait::async_trait;
use serde_json::Value;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::user::models::Username;

/// Port for todo domain service operations.
///
/// Every operation is scoped to the owning username; one user can never
/// address another user's items.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Fetch the payload stored for `(id, owner)`.
    ///
    /// # Returns
    /// The stored JSON, or an empty array when nothing has been saved yet
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn get_todo(&self, owner: &Username, id: &TodoId) -> Result<Value, TodoError>;

    /// Store `payload` for `(id, owner)`, replacing any previous value.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn put_todo(&self, owner: &Username, id: &TodoId, payload: Value)
        -> Result<(), TodoError>;
}

/// Persistence operations for todo items.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn get(&self, owner: &Username, id: &TodoId) -> Result<Option<Value>, TodoError>;

    /// Unconditional write.
    async fn put(&self, owner: &Username, id: &TodoId, payload: Value) -> Result<(), TodoError>;
}
