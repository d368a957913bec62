use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::dto::WhoAmIResponse;
use crate::context::PrincipalContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(principal): Extension<PrincipalContext>) -> impl IntoResponse {
    let actor = principal.actor();
    Json(WhoAmIResponse {
        principal_id: principal.principal_id(),
        role: actor.role.clone(),
        client_id: actor.owned_client_id.clone(),
    })
}
