use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::keys::ItemKey;
use super::records::UserRecord;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local item store with the same key scheme as the Postgres one.
///
/// Used for development runs and integration tests. Contents are lost on
/// restart.
#[derive(Default)]
pub struct InMemoryItemStore {
    items: RwLock<HashMap<ItemKey, Value>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryItemStore {
    async fn exists(&self, username: &Username) -> Result<bool, UserError> {
        Ok(self
            .items
            .read()
            .await
            .contains_key(&ItemKey::user(username)))
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        let data = UserRecord::from(&user).into_value()?;

        match self.items.write().await.entry(ItemKey::user(&user.username)) {
            Entry::Occupied(_) => Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(data);
                Ok(user)
            }
        }
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let data = self
            .items
            .read()
            .await
            .get(&ItemKey::user(username))
            .cloned();

        match data {
            Some(value) => Ok(Some(User::try_from(UserRecord::from_value(value)?)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TodoRepository for InMemoryItemStore {
    async fn get(&self, owner: &Username, id: &TodoId) -> Result<Option<Value>, TodoError> {
        Ok(self
            .items
            .read()
            .await
            .get(&ItemKey::todo(owner, id))
            .cloned())
    }

    async fn put(&self, owner: &Username, id: &TodoId, payload: Value) -> Result<(), TodoError> {
        self.items
            .write()
            .await
            .insert(ItemKey::todo(owner, id), payload);
        Ok(())
    }
}
