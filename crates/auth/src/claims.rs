use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use adboard_core::ClientId;

use crate::{Actor, PrincipalId, Role};

/// JWT claims model (transport-agnostic).
///
/// The minimal set of claims adboard expects once a token has been decoded
/// and its signature verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject / principal identifier.
    pub sub: PrincipalId,

    pub role: Role,

    /// Client the subject belongs to. Only meaningful for `client` roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,

    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl JwtClaims {
    /// The actor these claims describe.
    pub fn actor(&self) -> Actor {
        Actor::new(self.role.clone(), self.client_id.clone())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,

    #[error("malformed or unverifiable token: {0}")]
    Malformed(String),
}

/// Deterministically validate JWT claims.
///
/// Note: this validates the *claims* only. Signature verification lives in
/// [`crate::jwt`].
pub fn validate_claims(claims: &JwtClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims_at(now: DateTime<Utc>) -> JwtClaims {
        JwtClaims {
            sub: PrincipalId::new(),
            role: Role::Client,
            client_id: Some(ClientId::parse("tenant-42").unwrap()),
            issued_at: now,
            expires_at: now + Duration::minutes(10),
        }
    }

    #[test]
    fn valid_window_passes() {
        let now = Utc::now();
        assert_eq!(validate_claims(&claims_at(now), now + Duration::minutes(1)), Ok(()));
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let claims = claims_at(now);
        assert_eq!(
            validate_claims(&claims, claims.expires_at),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn future_tokens_are_rejected() {
        let now = Utc::now();
        assert_eq!(
            validate_claims(&claims_at(now), now - Duration::seconds(1)),
            Err(TokenValidationError::NotYetValid)
        );
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        let mut claims = claims_at(now);
        claims.expires_at = claims.issued_at;
        assert_eq!(
            validate_claims(&claims, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }

    #[test]
    fn actor_carries_role_and_client() {
        let claims = claims_at(Utc::now());
        let actor = claims.actor();
        assert_eq!(actor.role, Role::Client);
        assert_eq!(actor.owned_client_id.unwrap().as_str(), "tenant-42");
    }
}
