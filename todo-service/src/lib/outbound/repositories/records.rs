use auth::DerivationParams;
use auth::PasswordCredential;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Stored shape of a user item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
    pub derivation_params: DerivationParams,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn into_value(self) -> Result<Value, UserError> {
        serde_json::to_value(self).map_err(|e| UserError::Unknown(e.to_string()))
    }

    pub fn from_value(value: Value) -> Result<Self, UserError> {
        serde_json::from_value(value)
            .map_err(|e| UserError::DatabaseError(format!("Corrupt user record: {}", e)))
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.as_str().to_string(),
            fullname: user.fullname.as_str().to_string(),
            email: user.email.as_str().to_string(),
            password_hash: user.credential.hash.clone(),
            salt: user.credential.salt.clone(),
            derivation_params: user.credential.params.clone(),
            created_at: user.created_at,
        }
    }
}

impl TryFrom<UserRecord> for User {
    type Error = UserError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Ok(User {
            username: Username::new(record.username)?,
            fullname: FullName::new(record.fullname)?,
            email: EmailAddress::new(record.email)?,
            credential: PasswordCredential {
                hash: record.password_hash,
                salt: record.salt,
                params: record.derivation_params,
            },
            created_at: record.created_at,
        })
    }
}
