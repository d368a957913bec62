use std::sync::Arc;

use axum::{
    RequestExt,
    body::Body,
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use adboard_auth::{JwtValidator, explain_client_access};

use crate::app::errors;
use crate::context::{ClientScope, PrincipalContext};
use crate::routing::{ResolveError, RouteParams, resolve_client_slug};

#[derive(Clone)]
pub struct AuthState {
    pub jwt: Arc<dyn JwtValidator>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = extract_bearer(req.headers())?;

    let claims = state.jwt.validate(token, Utc::now()).map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        StatusCode::UNAUTHORIZED
    })?;

    req.extensions_mut()
        .insert(PrincipalContext::new(claims.sub, claims.actor()));

    Ok(next.run(req).await)
}

/// Resolve the `clientId` route parameter and authorize the actor against it.
///
/// Installed as a route layer on client-scoped routes so path parameters are
/// available. On success the handler receives a [`ClientScope`] extension.
pub async fn client_scope_middleware(mut req: Request<Body>, next: Next) -> Response {
    let resolved = resolve_client_slug(async {
        req.extract_parts::<Path<RouteParams>>()
            .await
            .map(|Path(params)| params)
            .map_err(|rejection| match rejection {
                PathRejection::FailedToDeserializePathParams(e) => {
                    ResolveError::InvalidClientId(e.body_text())
                }
                _ => ResolveError::Unavailable,
            })
    })
    .await;

    let client_slug = match resolved {
        Ok(slug) => slug,
        Err(e) => return errors::resolve_error_to_response(e),
    };

    let Some(principal) = req.extensions().get::<PrincipalContext>() else {
        return errors::json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "unauthenticated");
    };

    let explanation = explain_client_access(principal.actor(), &client_slug);
    if !explanation.granted {
        tracing::warn!(
            principal_id = %principal.principal_id(),
            role = %explanation.role,
            client_id = %client_slug,
            denial = explanation.denial.map(|d| d.as_str()).unwrap_or_default(),
            "client access denied"
        );
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", explanation.reason);
    }

    req.extensions_mut().insert(ClientScope::new(client_slug));
    next.run(req).await
}

/// Reject every actor that is not an admin.
pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    let is_admin = req
        .extensions()
        .get::<PrincipalContext>()
        .is_some_and(|p| p.actor().role.is_admin());

    if !is_admin {
        return errors::json_error(StatusCode::FORBIDDEN, "forbidden", "admin role required");
    }

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token)
}
