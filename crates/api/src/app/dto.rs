use serde::Serialize;

use adboard_auth::{PrincipalId, Role};
use adboard_core::ClientId;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub principal_id: PrincipalId,
    pub role: Role,
    pub client_id: Option<ClientId>,
}

/// A freshly issued credential. The password is shown once and never stored here.
#[derive(Debug, Serialize)]
pub struct IssuedCredentialResponse {
    pub client_id: ClientId,
    pub temporary_password: String,
}
