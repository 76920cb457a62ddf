use axum::Extension;

use crate::domain::session::models::AuthenticatedIdentity;

pub async fn protected(Extension(identity): Extension<AuthenticatedIdentity>) -> String {
    format!(
        "Hello, {}! You have access to this protected resource.",
        identity.username
    )
}
