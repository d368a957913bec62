//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared, immutable request-time services
//! - `views.rs`: named portal views and the renderer seam
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router with the default view renderer.
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_renderer(config, Arc::new(views::DescriptorRenderer))
}

/// Build the full HTTP router, delegating portal views to `renderer`.
pub fn build_app_with_renderer(config: &ApiConfig, renderer: Arc<dyn views::ViewRenderer>) -> Router {
    let jwt = Arc::new(adboard_auth::Hs256JwtValidator::new(config.jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { jwt };

    let services = Arc::new(services::AppServices::new(renderer, config.temp_password_length));

    // Protected routes: require a valid bearer token.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
