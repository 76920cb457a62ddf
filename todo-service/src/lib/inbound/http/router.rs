use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::protected::protected;
use super::handlers::register::register;
use super::handlers::todos::get_todo;
use super::handlers::todos::list_without_id;
use super::handlers::todos::missing_todo_id;
use super::handlers::todos::put_todo;
use super::middleware::authenticate;
use super::middleware::require_json_content_type;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub session_service: Arc<dyn SessionServicePort>,
    pub todo_service: Arc<dyn TodoServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    session_service: Arc<dyn SessionServicePort>,
    todo_service: Arc<dyn TodoServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        session_service,
        todo_service,
    };

    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/protected", get(protected))
        .route("/todos/:id", get(get_todo).put(put_todo))
        .route("/todos", get(list_without_id).put(missing_todo_id))
        .route("/todos/", get(list_without_id).put(missing_todo_id))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(require_json_content_type))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
