//! Read paths: title lookup, query search, category search.

use super::{require_text, Reconciler};
use crate::error::CoreError;
use crate::movie::{same_title, MovieRecord, QuerySummary};

impl Reconciler {
    /// Resolve a single movie by (partial) title.
    ///
    /// A deleted local match hides everything else. Provider results are
    /// returned without being persisted.
    pub async fn lookup_by_title(&self, title: &str) -> Result<MovieRecord, CoreError> {
        require_text(title, "Title cannot be empty")?;

        let active = self.store.find_active_by_title_contains(title).await?;
        if self
            .store
            .find_deleted_by_title_contains(title)
            .await?
            .is_some()
        {
            return Err(CoreError::NotFound(format!("Movie: {title} is deleted")));
        }

        if let Some(first) = active.into_iter().next() {
            return Ok(first);
        }

        tracing::debug!(%title, "No local match, asking provider");
        self.remote_by_title(title)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Movie: {title} doesn't exist")))
    }

    /// Free-text search merging local matches with provider candidates.
    ///
    /// Local results come first. A provider candidate is dropped when its
    /// title is already among the local results or belongs to a deleted
    /// local record; survivors are re-fetched for their short plot.
    pub async fn search_by_query(&self, query: &str) -> Result<Vec<QuerySummary>, CoreError> {
        require_text(query, "Query cannot be empty")?;

        let local = self.store.find_active_by_title_contains(query).await?;
        let mut results: Vec<QuerySummary> = local.iter().map(MovieRecord::summary).collect();

        let candidates = self
            .provider
            .search(query)
            .await
            .map_err(|e| self.unavailable(e))?;

        for candidate in candidates {
            if local.iter().any(|m| same_title(&m.title, &candidate.title)) {
                continue;
            }
            if self
                .store
                .find_deleted_by_title_exact(&candidate.title)
                .await?
                .is_some()
            {
                tracing::debug!(title = %candidate.title, "Suppressing deleted title from search");
                continue;
            }
            let detail = match self.remote_by_id(&candidate.external_id).await? {
                Some(movie) => movie.summary(),
                None => candidate,
            };
            results.push(detail);
        }

        if results.is_empty() {
            return Err(CoreError::NotFound(format!(
                "No movies for this query: {query}"
            )));
        }
        Ok(results)
    }

    /// Search by title text, keeping only movies whose category contains
    /// `category` (case-sensitive).
    ///
    /// Unlike [`Self::search_by_query`], local and provider results are not
    /// de-duplicated against each other.
    pub async fn search_by_category(
        &self,
        query: &str,
        category: &str,
    ) -> Result<Vec<MovieRecord>, CoreError> {
        require_text(query, "Query cannot be empty")?;
        require_text(category, "Category cannot be empty")?;

        let mut results: Vec<MovieRecord> = self
            .store
            .find_active_by_title_contains(query)
            .await?
            .into_iter()
            .filter(|m| m.category_contains(category))
            .collect();

        let candidates = self
            .provider
            .search(query)
            .await
            .map_err(|e| self.unavailable(e))?;

        for candidate in candidates {
            if let Some(movie) = self.remote_by_id(&candidate.external_id).await? {
                if movie.category_contains(category) {
                    results.push(movie);
                }
            }
        }

        if results.is_empty() {
            return Err(CoreError::NotFound(format!(
                "No {category} movies for this query: {query}"
            )));
        }
        Ok(results)
    }
}
