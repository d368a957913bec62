use serde::{Deserialize, Serialize};
use uuid::Uuid;

use adboard_core::ClientId;

use crate::Role;

/// Identity of an authenticated principal (agency staff, client user).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// The entity requesting access: a role plus, for client users, the client
/// the actor belongs to.
///
/// Read-only input to access checks; how actors are created and stored is
/// outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub role: Role,
    pub owned_client_id: Option<ClientId>,
}

impl Actor {
    pub fn new(role: Role, owned_client_id: Option<ClientId>) -> Self {
        Self {
            role,
            owned_client_id,
        }
    }

    pub fn admin() -> Self {
        Self::new(Role::Admin, None)
    }

    pub fn client(owned_client_id: ClientId) -> Self {
        Self::new(Role::Client, Some(owned_client_id))
    }

    /// Whether this actor may view `requested`'s data.
    pub fn can_access(&self, requested: &ClientId) -> bool {
        crate::can_access_client(&self.role, self.owned_client_id.as_ref(), requested)
    }
}
