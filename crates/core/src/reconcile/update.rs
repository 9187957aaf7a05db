//! Updating a movie by external ID, materializing it from the provider when
//! the catalog has never seen it.

use super::Reconciler;
use crate::error::CoreError;
use crate::external_id::is_provider_id;
use crate::movie::{is_blank, same_title, MovieInput, MovieRecord};

impl Reconciler {
    /// Apply `proposed` to the movie with `external_id`.
    ///
    /// Blank proposed fields keep their current values. An update of a local
    /// record must rename it: a proposed title equal to the current one or to
    /// any active record's is rejected. A provider-only movie is copied into
    /// the catalog as-is, and only the store's uniqueness rules apply.
    pub async fn update_by_external_id(
        &self,
        external_id: &str,
        proposed: MovieInput,
    ) -> Result<MovieRecord, CoreError> {
        let new_title = match proposed.title.as_deref() {
            Some(t) if !is_blank(Some(t)) => t.to_string(),
            _ => return Err(CoreError::EmptyInput("Title cannot be empty".into())),
        };

        let active = self.store.find_active_by_external_id(external_id).await?;
        let deleted = self.store.find_deleted_by_external_id(external_id).await?;

        let remote = if active.is_none() && is_provider_id(external_id) {
            match self.provider.fetch_by_id(external_id).await {
                Ok(found) => found.filter(MovieRecord::has_title),
                Err(err) => {
                    tracing::warn!(%external_id, error = %err, "Provider fetch for update failed");
                    return Err(CoreError::NotFound(format!(
                        "Error retrieving movie data for imdbID: {external_id}"
                    )));
                }
            }
        } else {
            None
        };

        match (active, remote, deleted) {
            (Some(current), _, None) => {
                if proposed.matches(&current) {
                    return Err(CoreError::NoChanges(format!(
                        "No changes detected for movie with imdbID: {external_id}"
                    )));
                }
                if same_title(&current.title, &new_title)
                    || self.store.exists_active_by_title(&new_title).await?
                {
                    return Err(title_taken(&new_title));
                }
                self.apply_update(current, &proposed).await
            }
            (None, Some(remote), None) => {
                self.materialize_update(external_id, remote, &proposed)
                    .await
            }
            _ => Err(CoreError::NotFound(format!(
                "Movie with this imdbID: {external_id} is not found"
            ))),
        }
    }

    async fn apply_update(
        &self,
        mut movie: MovieRecord,
        proposed: &MovieInput,
    ) -> Result<MovieRecord, CoreError> {
        let old_title = movie.title.clone();
        if movie.previous_title.is_none() {
            movie.previous_title = Some(old_title.clone());
        }
        movie.overlay(proposed);
        movie.updated = true;

        let saved = self.store.save(movie).await?;
        tracing::info!(
            external_id = %saved.external_id,
            from = %old_title,
            to = %saved.title,
            "Movie updated"
        );
        Ok(saved)
    }

    /// First local copy of a provider movie, with the proposed edits on top.
    async fn materialize_update(
        &self,
        external_id: &str,
        remote: MovieRecord,
        proposed: &MovieInput,
    ) -> Result<MovieRecord, CoreError> {
        let mut movie = remote.detached();
        if movie.external_id.trim().is_empty() {
            movie.external_id = external_id.to_string();
        }
        movie.previous_title = Some(remote.title);
        movie.overlay(proposed);
        movie.updated = true;

        let saved = self.store.save(movie).await?;
        tracing::info!(
            external_id = %saved.external_id,
            title = %saved.title,
            "Materialized provider movie on update"
        );
        Ok(saved)
    }
}

fn title_taken(title: &str) -> CoreError {
    CoreError::AlreadyExists(format!("Title: {title} already exists"))
}
