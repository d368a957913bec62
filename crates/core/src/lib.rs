//! `adboard-core` — domain primitives shared by every adboard crate.
//!
//! Pure types only: no HTTP, no storage.

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::ClientId;
