use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde_json::Value;

use super::ApiError;
use super::ApiSuccess;
use super::MessageBody;
use crate::domain::session::models::AuthenticatedIdentity;
use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoServicePort;
use crate::inbound::http::extract::JsonBody;
use crate::inbound::http::router::AppState;

pub async fn get_todo(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = TodoId::new(id).map_err(TodoError::from)?;

    state
        .todo_service
        .get_todo(&identity.username, &id)
        .await
        .map_err(ApiError::from)
        .map(Json)
}

pub async fn put_todo(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<Value>,
) -> Result<ApiSuccess<MessageBody>, ApiError> {
    let id = TodoId::new(id).map_err(TodoError::from)?;

    state
        .todo_service
        .put_todo(&identity.username, &id, payload)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageBody::new("Todo saved successfully")))
}

/// `GET /todos` and `GET /todos/`: nothing can be stored without an id.
pub async fn list_without_id() -> Json<Value> {
    Json(Value::Array(Vec::new()))
}

/// `PUT /todos` and `PUT /todos/`.
pub async fn missing_todo_id() -> ApiError {
    ApiError::BadRequest("Missing todo id".to_string())
}
