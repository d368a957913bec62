//! HTTP API: server wiring, client-scoped portal routes, and admin routes.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
pub mod routing;
