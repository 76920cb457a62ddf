use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageBody;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::FullName;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterRequestBody>,
) -> Result<ApiSuccess<MessageBody>, ApiError> {
    let command = body.try_into_command()?;

    state
        .user_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageBody::new("User registered successfully"),
            )
        })
}

/// HTTP request body for registration (raw JSON).
///
/// Fields are optional so that an absent field is reported by name.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: Option<String>,
    password: Option<String>,
    fullname: Option<String>,
    email: Option<String>,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, ApiError> {
        let username = required(self.username, "username")?;
        let password = required(self.password, "password")?;
        let fullname = required(self.fullname, "fullname")?;
        let email = required(self.email, "email")?;

        Ok(parse_command(username, password, fullname, email)?)
    }
}

fn parse_command(
    username: String,
    password: String,
    fullname: String,
    email: String,
) -> Result<RegisterUserCommand, UserError> {
    Ok(RegisterUserCommand::new(
        Username::new(username)?,
        Password::new(password)?,
        FullName::new(fullname)?,
        EmailAddress::new(email)?,
    ))
}

fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::missing_field(name)),
    }
}
