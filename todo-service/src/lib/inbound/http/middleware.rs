use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::session::ports::SessionServicePort;
use crate::inbound::http::router::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Middleware that validates bearer tokens and adds the caller's identity
/// to request extensions.
///
/// Every rejection carries the same body; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)
        .map(str::to_string)
        .map_err(|reason| {
            tracing::warn!(reason, "Rejected request without usable bearer token");
            unauthorized()
        })?;

    let identity = state
        .session_service
        .verify_token(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed");
            unauthorized()
        })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Middleware rejecting bodies that are not declared as JSON.
///
/// Applies to every method except GET, HEAD and OPTIONS.
pub async fn require_json_content_type(req: Request, next: Next) -> Response {
    let exempt = matches!(*req.method(), Method::GET | Method::HEAD | Method::OPTIONS);

    if !exempt && !is_json_content_type(&req) {
        return ApiError::UnsupportedContentType.into_response();
    }

    next.run(req).await
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Unauthorized".to_string()).into_response()
}

fn extract_bearer_token(req: &Request) -> Result<&str, &'static str> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or("missing Authorization header")?
        .to_str()
        .map_err(|_| "Authorization header is not valid UTF-8")?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or("Authorization header is not a Bearer credential")?
        .trim();

    if token.is_empty() {
        return Err("empty bearer token");
    }

    Ok(token)
}

fn is_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
