use serde::Serialize;

use adboard_core::ClientId;

use crate::{Actor, Role};

/// Decide whether a role may view a client's data.
///
/// Rules, first match wins:
/// 1. `Admin` may view every client.
/// 2. `Client` may view only the client it owns (exact slug equality). A
///    client actor without an owned client is denied.
/// 3. Every other role is denied.
///
/// - No IO
/// - No panics
/// - Never errors: unknown input resolves to `false`
pub fn can_access_client(role: &Role, owned: Option<&ClientId>, requested: &ClientId) -> bool {
    match role {
        Role::Admin => true,
        Role::Client => owned.is_some_and(|owned| owned == requested),
        Role::Other(_) => false,
    }
}

/// String-level form of [`can_access_client`] for callers that hold raw role
/// names and slugs (session payloads, route params).
///
/// Role names are matched exactly and case-sensitively; slugs are compared
/// with plain string equality.
pub fn is_authorized(role: &str, owned_client_id: &str, requested_client_id: &str) -> bool {
    match Role::parse(role) {
        Role::Admin => true,
        Role::Client => owned_client_id == requested_client_id,
        Role::Other(_) => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Access Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of a client-access decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessExplanation {
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    pub role: Role,
    pub owned_client_id: Option<ClientId>,
    pub requested_client_id: ClientId,

    /// Set only when access was denied.
    pub denial: Option<DenialKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    /// A client actor asked for another client's data.
    ClientMismatch,
    /// A client actor carries no owned client at all.
    MissingOwnedClient,
    /// The role is neither admin nor client.
    UnrecognizedRole,
}

impl DenialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialKind::ClientMismatch => "client_mismatch",
            DenialKind::MissingOwnedClient => "missing_owned_client",
            DenialKind::UnrecognizedRole => "unrecognized_role",
        }
    }
}

/// Explain why `actor` is (or is not) allowed to view `requested`.
///
/// The `granted` flag always agrees with [`Actor::can_access`].
pub fn explain_client_access(actor: &Actor, requested: &ClientId) -> AccessExplanation {
    let (reason, denial) = match (&actor.role, actor.owned_client_id.as_ref()) {
        (Role::Admin, _) => ("admin role may view every client".to_string(), None),
        (Role::Client, Some(owned)) if owned == requested => (
            format!("client actor owns client '{requested}'"),
            None,
        ),
        (Role::Client, Some(owned)) => (
            format!("client actor owns '{owned}' but requested '{requested}'"),
            Some(DenialKind::ClientMismatch),
        ),
        (Role::Client, None) => (
            "client actor is not bound to any client".to_string(),
            Some(DenialKind::MissingOwnedClient),
        ),
        (Role::Other(name), _) => (
            format!("role '{name}' is not authorized for client data"),
            Some(DenialKind::UnrecognizedRole),
        ),
    };

    AccessExplanation {
        granted: denial.is_none(),
        reason,
        role: actor.role.clone(),
        owned_client_id: actor.owned_client_id.clone(),
        requested_client_id: requested.clone(),
        denial,
    }
}
