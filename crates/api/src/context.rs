use adboard_auth::{Actor, PrincipalId};
use adboard_core::ClientId;

/// Principal context for a request (authenticated identity + actor).
///
/// Inserted by the auth middleware; present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: PrincipalId,
    actor: Actor,
}

impl PrincipalContext {
    pub fn new(principal_id: PrincipalId, actor: Actor) -> Self {
        Self { principal_id, actor }
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }
}

/// Resolved, authorized client scope for a portal request.
///
/// Only exists once the `clientId` route parameter has been resolved and the
/// actor has been authorized against it; portal handlers take this, never
/// the raw route parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientScope {
    client_slug: ClientId,
}

impl ClientScope {
    pub(crate) fn new(client_slug: ClientId) -> Self {
        Self { client_slug }
    }

    pub fn client_slug(&self) -> &ClientId {
        &self.client_slug
    }
}
