//! Reconciliation engine.
//!
//! [`Reconciler`] answers every catalog operation by arbitrating between the
//! local [`MovieStore`] and the external [`MovieProvider`]:
//!
//! - a deleted local record always wins over active or provider data for
//!   the same title,
//! - an active local record wins over provider data,
//! - provider data is returned as-is for reads and materialized into the
//!   store only when a write (update, delete, rating) needs a local row.
//!
//! Every write flow finishes all of its checks before the single
//! [`MovieStore::save`] call, so a failed operation never leaves a partial
//! write behind.

mod create;
mod lifecycle;
mod lookup;
mod rating;
mod update;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use crate::error::CoreError;
use crate::external_id::{generate_unique_id, IdSource, RandomIdSource};
use crate::movie::MovieRecord;
use crate::provider::{MovieProvider, ProviderError};
use crate::store::MovieStore;

/// The catalog engine. Cheap to share behind an `Arc`.
pub struct Reconciler {
    store: Arc<dyn MovieStore>,
    provider: Arc<dyn MovieProvider>,
    ids: Arc<dyn IdSource>,
}

impl Reconciler {
    /// Build an engine that draws local IDs from the thread-local RNG.
    pub fn new(store: Arc<dyn MovieStore>, provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            store,
            provider,
            ids: Arc::new(RandomIdSource),
        }
    }

    /// Replace the source of local ID candidates.
    pub fn with_id_source(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    // ---- shared helpers ----

    /// Provider lookup by title. Records without a usable title count as
    /// "not found"; transport failures become `ExternalUnavailable`.
    async fn remote_by_title(&self, title: &str) -> Result<Option<MovieRecord>, CoreError> {
        let found = self
            .provider
            .fetch_by_title(title)
            .await
            .map_err(|e| self.unavailable(e))?;
        Ok(found.filter(MovieRecord::has_title))
    }

    /// Provider lookup by ID with the same failure mapping as
    /// [`Self::remote_by_title`].
    async fn remote_by_id(&self, external_id: &str) -> Result<Option<MovieRecord>, CoreError> {
        let found = self
            .provider
            .fetch_by_id(external_id)
            .await
            .map_err(|e| self.unavailable(e))?;
        Ok(found.filter(MovieRecord::has_title))
    }

    fn unavailable(&self, err: ProviderError) -> CoreError {
        tracing::warn!(provider = self.provider.name(), error = %err, "Provider call failed");
        CoreError::ExternalUnavailable(err.to_string())
    }

    async fn next_local_id(&self) -> Result<String, CoreError> {
        generate_unique_id(self.store.as_ref(), self.ids.as_ref()).await
    }
}

/// Reject a blank required parameter.
fn require_text(value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::EmptyInput(message.to_string()))
    } else {
        Ok(())
    }
}
