//! Soft delete and re-enable.

use super::{require_text, Reconciler};
use crate::error::CoreError;
use crate::movie::MovieRecord;

impl Reconciler {
    /// Soft-delete the movie with `external_id`.
    ///
    /// A provider-only movie is materialized as a deleted row so that later
    /// lookups keep hiding it.
    pub async fn delete_by_external_id(&self, external_id: &str) -> Result<MovieRecord, CoreError> {
        if self
            .store
            .find_deleted_by_external_id(external_id)
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyDeleted(format!(
                "Movie with imdbID: {external_id} is already deleted"
            )));
        }

        let mut movie = match self.store.find_active_by_external_id(external_id).await? {
            Some(active) => active,
            None => self.remote_for_delete(external_id).await?.detached(),
        };
        movie.deleted = true;

        let saved = self.store.save(movie).await?;
        tracing::info!(
            external_id = %saved.external_id,
            title = %saved.title,
            "Movie deleted"
        );
        Ok(saved)
    }

    async fn remote_for_delete(&self, external_id: &str) -> Result<MovieRecord, CoreError> {
        let not_found =
            || CoreError::NotFound(format!("Movie with this imdbID: {external_id} is not found"));

        let remote = match self.provider.fetch_by_id(external_id).await {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(%external_id, error = %err, "Provider fetch for delete failed");
                return Err(not_found());
            }
        };

        remote
            .filter(|m| m.has_title() && !m.external_id.trim().is_empty())
            .ok_or_else(not_found)
    }

    /// Restore a soft-deleted movie by exact (case-insensitive) title.
    pub async fn enable(&self, title: &str) -> Result<MovieRecord, CoreError> {
        require_text(title, "Title cannot be empty")?;

        if self.store.find_active_by_title_exact(title).await?.is_some() {
            return Err(CoreError::AlreadyEnabled(format!(
                "This movie: {title} is already enabled"
            )));
        }

        let Some(mut movie) = self.store.find_deleted_by_title_exact(title).await? else {
            return Err(CoreError::NotFound(format!("This movie: {title} doesn't exist")));
        };
        movie.deleted = false;

        let saved = self.store.save(movie).await?;
        tracing::info!(
            external_id = %saved.external_id,
            title = %saved.title,
            "Movie enabled"
        );
        Ok(saved)
    }
}
