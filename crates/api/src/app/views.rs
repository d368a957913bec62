//! Named portal views and the seam to whatever renders them.

use serde_json::{Value, json};

use adboard_core::ClientId;

/// The view a client-scoped portal route delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortalView {
    ClientDashboard,
    CampaignsView,
    ChartsView,
    SettingsView,
    ReportsView,
}

impl PortalView {
    pub fn name(&self) -> &'static str {
        match self {
            PortalView::ClientDashboard => "ClientDashboard",
            PortalView::CampaignsView => "CampaignsView",
            PortalView::ChartsView => "ChartsView",
            PortalView::SettingsView => "SettingsView",
            PortalView::ReportsView => "ReportsView",
        }
    }
}

/// Renders a portal view for one resolved client.
///
/// Implementations only ever see an authorized, resolved [`ClientId`].
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: PortalView, client_slug: &ClientId) -> Value;
}

/// Default renderer: describes which view to show for which client and leaves
/// presentation to the front end.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorRenderer;

impl ViewRenderer for DescriptorRenderer {
    fn render(&self, view: PortalView, client_slug: &ClientId) -> Value {
        json!({
            "view": view.name(),
            "clientSlug": client_slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_names_view_and_client() {
        let slug = ClientId::parse("tenant-42").unwrap();
        let body = DescriptorRenderer.render(PortalView::ReportsView, &slug);
        assert_eq!(body, json!({ "view": "ReportsView", "clientSlug": "tenant-42" }));
    }
}
