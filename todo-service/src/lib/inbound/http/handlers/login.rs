use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let username = body
        .username
        .ok_or_else(|| ApiError::missing_field("username"))?;
    let password = body
        .password
        .ok_or_else(|| ApiError::missing_field("password"))?;

    let user = state
        .user_service
        .verify_credentials(LoginCommand::new(username, password))
        .await?;

    let token = state.session_service.issue_token(&user).await?;
    tracing::info!(username = %user.username, "User logged in");

    Ok(ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
