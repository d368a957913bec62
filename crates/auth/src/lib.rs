//! `adboard-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod access;
pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;
pub mod secret;

pub use access::{
    AccessExplanation, DenialKind, can_access_client, explain_client_access, is_authorized,
};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use principal::{Actor, PrincipalId};
pub use roles::Role;
pub use secret::{
    DEFAULT_PASSWORD_LENGTH, PASSWORD_ALPHABET, generate_default_password,
    generate_temporary_password, generate_with,
};
