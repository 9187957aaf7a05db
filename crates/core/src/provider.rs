//! External metadata provider contract.

use async_trait::async_trait;

use crate::movie::{MovieRecord, QuerySummary};

/// Errors that can occur when calling the metadata provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not be reached or answered with an error status.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered but the payload could not be understood.
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

/// Read-only access to the authoritative movie metadata source.
///
/// "Not found" is `Ok(None)` / an empty list, never an error.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Best match for an exact title.
    async fn fetch_by_title(&self, title: &str) -> Result<Option<MovieRecord>, ProviderError>;

    /// Full detail for a provider ID.
    async fn fetch_by_id(&self, external_id: &str) -> Result<Option<MovieRecord>, ProviderError>;

    /// Lightweight candidates for free-text search, in provider order.
    async fn search(&self, query: &str) -> Result<Vec<QuerySummary>, ProviderError>;

    /// Provider name for logging and debugging.
    fn name(&self) -> &'static str;
}
