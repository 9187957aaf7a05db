//! Local store contract consumed by the reconciliation engine.
//!
//! Implementations partition records into an active view (`deleted = false`)
//! and a deleted view. Titles match case-insensitively; external IDs match
//! exactly. Within each view a title or external ID appears at most once,
//! and `save` reports a violation as [`StoreError::Conflict`].

use async_trait::async_trait;

use crate::error::CoreError;
use crate::movie::MovieRecord;

/// Errors surfaced by a [`MovieStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write would break a natural-key uniqueness rule.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backend failed (connection, query, missing row, ...).
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => CoreError::AlreadyExists(msg),
            StoreError::Backend(msg) => CoreError::Internal(msg),
        }
    }
}

/// Keyed record store with title and external-ID indexes.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Active records whose title contains `text`, in retrieval order.
    async fn find_active_by_title_contains(
        &self,
        text: &str,
    ) -> Result<Vec<MovieRecord>, StoreError>;

    /// The active record with exactly this title, if any.
    async fn find_active_by_title_exact(
        &self,
        title: &str,
    ) -> Result<Option<MovieRecord>, StoreError>;

    /// The deleted record with exactly this title, if any.
    async fn find_deleted_by_title_exact(
        &self,
        title: &str,
    ) -> Result<Option<MovieRecord>, StoreError>;

    /// The first deleted record whose title contains `text`.
    async fn find_deleted_by_title_contains(
        &self,
        text: &str,
    ) -> Result<Option<MovieRecord>, StoreError>;

    async fn find_active_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<MovieRecord>, StoreError>;

    async fn find_deleted_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<MovieRecord>, StoreError>;

    async fn exists_active_by_title(&self, title: &str) -> Result<bool, StoreError> {
        Ok(self.find_active_by_title_exact(title).await?.is_some())
    }

    async fn exists_active_by_external_id(&self, external_id: &str) -> Result<bool, StoreError> {
        Ok(self.find_active_by_external_id(external_id).await?.is_some())
    }

    /// Insert (when `key` is `None`) or update the record.
    ///
    /// The record and its full rating list are written as one atomic unit:
    /// the stored ratings afterwards are exactly `movie.ratings`, in order.
    /// Returns the stored record with `key` populated.
    async fn save(&self, movie: MovieRecord) -> Result<MovieRecord, StoreError>;
}
