//! Admin routes for client account provisioning.
//!
//! Every endpoint here requires the admin role.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use adboard_auth::generate_temporary_password;
use adboard_core::ClientId;

use crate::app::{dto::IssuedCredentialResponse, errors, services::AppServices};
use crate::context::PrincipalContext;
use crate::middleware::require_admin;

pub fn router() -> Router {
    Router::new()
        .route("/clients/:clientId/credentials", post(issue_credentials))
        .route_layer(axum::middleware::from_fn(require_admin))
}

/// POST /admin/clients/:clientId/credentials - Issue a temporary password
pub async fn issue_credentials(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(client_id): Path<String>,
) -> Response {
    let client_id = match ClientId::parse(client_id) {
        Ok(id) => id,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_route", e.to_string()),
    };

    let temporary_password = generate_temporary_password(services.temp_password_length);

    tracing::info!(
        principal_id = %principal.principal_id(),
        client_id = %client_id,
        "issued temporary credentials"
    );

    (
        StatusCode::CREATED,
        Json(IssuedCredentialResponse {
            client_id,
            temporary_password,
        }),
    )
        .into_response()
}
