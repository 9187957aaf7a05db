//! Appending ratings to a movie addressed by title.

use super::{require_text, Reconciler};
use crate::error::CoreError;
use crate::movie::{same_title, MovieRecord, Rating};

impl Reconciler {
    /// Append `ratings` to the movie titled `title`.
    ///
    /// An active record is extended in place. When only the provider knows
    /// the movie, a local copy is created that carries the supplied ratings
    /// instead of the provider's.
    pub async fn append_rating(
        &self,
        title: &str,
        ratings: Vec<Rating>,
    ) -> Result<MovieRecord, CoreError> {
        require_text(title, "Title cannot be empty")?;
        let title = title.trim();

        let active = self
            .store
            .find_active_by_title_contains(title)
            .await?
            .into_iter()
            .next();
        if self
            .store
            .find_deleted_by_title_contains(title)
            .await?
            .is_some()
        {
            return Err(CoreError::NotFound(format!("This movie: {title} is deleted")));
        }

        if let Some(mut movie) = active.clone().filter(|m| same_title(&m.title, title)) {
            let added = ratings.len();
            movie.ratings.extend(ratings);
            let saved = self.store.save(movie).await?;
            tracing::info!(
                external_id = %saved.external_id,
                added,
                total = saved.ratings.len(),
                "Ratings appended"
            );
            return Ok(saved);
        }

        let remote = self.remote_by_title(title).await?;
        match (remote, active) {
            (Some(remote), None) => {
                let mut movie = remote.detached();
                movie.ratings = ratings;
                if movie.external_id.trim().is_empty() {
                    movie.external_id = self.next_local_id().await?;
                }
                let saved = self.store.save(movie).await?;
                tracing::info!(
                    external_id = %saved.external_id,
                    title = %saved.title,
                    "Materialized provider movie with ratings"
                );
                Ok(saved)
            }
            _ => Err(CoreError::NotFound(format!("This movie: {title} doesn't exist"))),
        }
    }
}
