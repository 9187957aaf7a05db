//! Creating catalog-local movies.

use super::Reconciler;
use crate::error::CoreError;
use crate::movie::{is_blank, same_title, MovieInput, MovieRecord};

impl Reconciler {
    /// Create a local movie that neither the provider nor the catalog knows.
    ///
    /// The new record gets a generated `ttt` ID and starts active and
    /// un-updated.
    pub async fn create(&self, input: MovieInput) -> Result<MovieRecord, CoreError> {
        let title = match input.title.as_deref() {
            Some(t) if !is_blank(Some(t)) => t,
            _ => return Err(CoreError::EmptyInput("Title cannot be empty".into())),
        };

        let known_remotely = self
            .remote_by_title(title)
            .await?
            .is_some_and(|remote| same_title(&remote.title, title));
        let active = self.store.find_active_by_title_exact(title).await?;
        let deleted = self.store.find_deleted_by_title_exact(title).await?;

        if known_remotely || active.is_some() {
            return Err(CoreError::AlreadyExists(format!(
                "This movie: {title} already exists"
            )));
        }
        if deleted.is_some() {
            return Err(CoreError::NotFound(format!("This movie: {title} is deleted")));
        }

        let external_id = self.next_local_id().await?;
        let saved = self.store.save(input.to_record(external_id)).await?;

        tracing::info!(
            external_id = %saved.external_id,
            title = %saved.title,
            ratings = saved.ratings.len(),
            "Movie created"
        );
        Ok(saved)
    }
}
