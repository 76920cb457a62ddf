use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::Username;

/// Domain service implementation for todo operations.
pub struct TodoService<TR>
where
    TR: TodoRepository + ?Sized,
{
    repository: Arc<TR>,
}

impl<TR> TodoService<TR>
where
    TR: TodoRepository + ?Sized,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TodoServicePort for TodoService<TR>
where
    TR: TodoRepository + ?Sized,
{
    async fn get_todo(&self, owner: &Username, id: &TodoId) -> Result<Value, TodoError> {
        let payload = self.repository.get(owner, id).await?;
        if payload.is_none() {
            tracing::debug!(owner = %owner, todo_id = %id, "Todo not found, returning empty list");
        }
        Ok(payload.unwrap_or_else(|| Value::Array(Vec::new())))
    }

    async fn put_todo(
        &self,
        owner: &Username,
        id: &TodoId,
        payload: Value,
    ) -> Result<(), TodoError> {
        self.repository.put(owner, id, payload).await?;
        tracing::info!(owner = %owner, todo_id = %id, "Todo saved");
        Ok(())
    }
}
