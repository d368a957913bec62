use serde::{Deserialize, Serialize};

/// Role of an actor in the dashboard.
///
/// The set is closed: anything that is not exactly `"admin"` or `"client"`
/// parses to [`Role::Other`] and is authorized against nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Agency staff; may view every client.
    Admin,
    /// A user bound to a single client.
    Client,
    /// Any unrecognized role name, kept verbatim for display and audit.
    Other(String),
}

impl Role {
    pub const ADMIN: &'static str = "admin";
    pub const CLIENT: &'static str = "client";

    /// Parse a role name. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> Self {
        match name {
            Self::ADMIN => Role::Admin,
            Self::CLIENT => Role::Client,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => Self::ADMIN,
            Role::Client => Self::CLIENT,
            Role::Other(name) => name,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::ADMIN => Role::Admin,
            Self::CLIENT => Role::Client,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse_exactly() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("client"), Role::Client);
        assert_eq!(Role::parse("Admin"), Role::Other("Admin".into()));
        assert_eq!(Role::parse("guest"), Role::Other("guest".into()));
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&Role::Other("guest".into())).unwrap(),
            "\"guest\""
        );

        let role: Role = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(role, Role::Client);
    }
}
