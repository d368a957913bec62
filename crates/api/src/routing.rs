//! Resolve-before-render for client-scoped routes.
//!
//! Every portal page needs the `clientId` route parameter before it can do
//! anything. The parameter bag is produced asynchronously; this module awaits
//! it and hands back a validated [`ClientId`], so a pending or missing
//! parameter can never reach a view.

use std::collections::HashMap;
use std::future::IntoFuture;

use thiserror::Error;

use adboard_core::ClientId;

/// Route parameter name carrying the client slug.
pub const CLIENT_ID_PARAM: &str = "clientId";

/// Route-parameter bag: parameter name to raw value.
pub type RouteParams = HashMap<String, String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("route parameters unavailable")]
    Unavailable,

    #[error("missing route parameter '{0}'")]
    MissingParam(&'static str),

    #[error("invalid client id: {0}")]
    InvalidClientId(String),
}

/// Await the deferred parameter bag and extract the client slug from it.
pub async fn resolve_client_slug<F>(params: F) -> Result<ClientId, ResolveError>
where
    F: IntoFuture<Output = Result<RouteParams, ResolveError>>,
{
    let mut params = params.await?;

    let raw = params
        .remove(CLIENT_ID_PARAM)
        .ok_or(ResolveError::MissingParam(CLIENT_ID_PARAM))?;

    ClientId::parse(raw).map_err(|e| ResolveError::InvalidClientId(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn resolves_client_id_after_bag_is_ready() {
        let bag = async {
            tokio::task::yield_now().await;
            Ok(params(&[("clientId", "tenant-42"), ("other", "x")]))
        };

        let slug = resolve_client_slug(bag).await.unwrap();
        assert_eq!(slug.as_str(), "tenant-42");
    }

    #[tokio::test]
    async fn missing_client_id_is_reported() {
        let bag = std::future::ready(Ok(params(&[("id", "tenant-42")])));
        assert_eq!(
            resolve_client_slug(bag).await,
            Err(ResolveError::MissingParam("clientId"))
        );
    }

    #[tokio::test]
    async fn empty_client_id_is_invalid() {
        let bag = std::future::ready(Ok(params(&[("clientId", "")])));
        assert!(matches!(
            resolve_client_slug(bag).await,
            Err(ResolveError::InvalidClientId(_))
        ));
    }

    #[tokio::test]
    async fn bag_failure_propagates() {
        let bag = std::future::ready(Err(ResolveError::Unavailable));
        assert_eq!(resolve_client_slug(bag).await, Err(ResolveError::Unavailable));
    }
}
