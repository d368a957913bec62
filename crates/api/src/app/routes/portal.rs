//! Client-scoped portal pages.
//!
//! Every route here carries a `clientId` path parameter. The client scope
//! layer resolves and authorizes it before any handler runs; handlers then
//! delegate to the named view with the resolved slug.

use std::sync::Arc;

use axum::{Json, Router, extract::Extension, routing::get};
use serde_json::Value;

use crate::app::services::AppServices;
use crate::app::views::PortalView;
use crate::context::ClientScope;
use crate::middleware::client_scope_middleware;

pub fn router() -> Router {
    Router::new()
        .route("/portal/:clientId", get(dashboard))
        .route("/portal/:clientId/campanhas", get(campaigns))
        .route("/portal/:clientId/charts", get(charts))
        .route("/portal/:clientId/configuracoes", get(settings))
        .route("/portal/:clientId/relatorios", get(reports))
        .route_layer(axum::middleware::from_fn(client_scope_middleware))
}

fn render(services: &AppServices, view: PortalView, scope: &ClientScope) -> Json<Value> {
    tracing::debug!(view = view.name(), client_id = %scope.client_slug(), "rendering portal view");
    Json(services.renderer.render(view, scope.client_slug()))
}

/// GET /portal/:clientId
pub async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(scope): Extension<ClientScope>,
) -> Json<Value> {
    render(&services, PortalView::ClientDashboard, &scope)
}

/// GET /portal/:clientId/campanhas
pub async fn campaigns(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(scope): Extension<ClientScope>,
) -> Json<Value> {
    render(&services, PortalView::CampaignsView, &scope)
}

/// GET /portal/:clientId/charts
pub async fn charts(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(scope): Extension<ClientScope>,
) -> Json<Value> {
    render(&services, PortalView::ChartsView, &scope)
}

/// GET /portal/:clientId/configuracoes
pub async fn settings(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(scope): Extension<ClientScope>,
) -> Json<Value> {
    render(&services, PortalView::SettingsView, &scope)
}

/// GET /portal/:clientId/relatorios
pub async fn reports(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(scope): Extension<ClientScope>,
) -> Json<Value> {
    render(&services, PortalView::ReportsView, &scope)
}
