use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use super::keys::ItemKey;
use super::records::UserRecord;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Item store backed by a single Postgres `items` table.
///
/// Every record is a JSONB document under a `(pk, sk)` primary key.
pub struct PostgresItemStore {
    pool: PgPool,
}

impl PostgresItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, key: &ItemKey) -> Result<Option<Value>, sqlx::Error> {
        sqlx::query_scalar::<_, Value>(
            r#"
            SELECT data
            FROM items
            WHERE pk = $1 AND sk = $2
            "#,
        )
        .bind(&key.pk)
        .bind(&key.sk)
        .fetch_optional(&self.pool)
        .await
    }
}

#[async_trait]
impl UserRepository for PostgresItemStore {
    async fn exists(&self, username: &Username) -> Result<bool, UserError> {
        let key = ItemKey::user(username);

        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM items WHERE pk = $1 AND sk = $2)
            "#,
        )
        .bind(&key.pk)
        .bind(&key.sk)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        let key = ItemKey::user(&user.username);
        let data = UserRecord::from(&user).into_value()?;

        let result = sqlx::query(
            r#"
            INSERT INTO items (pk, sk, data, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (pk, sk) DO NOTHING
            "#,
        )
        .bind(&key.pk)
        .bind(&key.sk)
        .bind(data)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let data = self
            .fetch(&ItemKey::user(username))
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        match data {
            Some(value) => Ok(Some(User::try_from(UserRecord::from_value(value)?)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TodoRepository for PostgresItemStore {
    async fn get(&self, owner: &Username, id: &TodoId) -> Result<Option<Value>, TodoError> {
        self.fetch(&ItemKey::todo(owner, id))
            .await
            .map_err(|e| TodoError::DatabaseError(e.to_string()))
    }

    async fn put(&self, owner: &Username, id: &TodoId, payload: Value) -> Result<(), TodoError> {
        let key = ItemKey::todo(owner, id);

        sqlx::query(
            r#"
            INSERT INTO items (pk, sk, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (pk, sk) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(&key.pk)
        .bind(&key.sk)
        .bind(payload)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
