use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use super::handlers::ApiError;

/// JSON body extractor whose rejections use this service's error bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedContentType,
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                ApiError::InvalidJson
            }
            other => {
                tracing::warn!(error = %other, "Request body rejected");
                ApiError::BadRequest(other.body_text())
            }
        }
    }
}
