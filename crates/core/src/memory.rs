//! In-process [`MovieStore`] used by tests and local development.
//!
//! Enforces the same natural-key uniqueness rules as the Postgres schema so
//! races and conflicts behave identically.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::movie::{contains_ignore_case, same_title, MovieRecord};
use crate::store::{MovieStore, StoreError};
use crate::types::DbId;

#[derive(Default)]
struct State {
    next_key: DbId,
    rows: Vec<MovieRecord>,
}

/// Vector-backed store. Retrieval order is insertion order.
#[derive(Default)]
pub struct InMemoryMovieStore {
    state: RwLock<State>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored record, active and deleted, in insertion order.
    pub async fn snapshot(&self) -> Vec<MovieRecord> {
        self.state.read().await.rows.clone()
    }

    async fn find_one(
        &self,
        deleted: bool,
        pred: impl Fn(&MovieRecord) -> bool,
    ) -> Option<MovieRecord> {
        let state = self.state.read().await;
        state
            .rows
            .iter()
            .find(|m| m.deleted == deleted && pred(m))
            .cloned()
    }
}

/// Name of the unique index a record would violate, if any.
fn violated_index(rows: &[MovieRecord], movie: &MovieRecord) -> Option<&'static str> {
    let same_view = rows
        .iter()
        .filter(|other| other.key != movie.key && other.deleted == movie.deleted);

    for other in same_view {
        if same_title(&other.title, &movie.title) {
            return Some(if movie.deleted {
                "uq_movies_deleted_title"
            } else {
                "uq_movies_active_title"
            });
        }
        if !movie.external_id.is_empty() && other.external_id == movie.external_id {
            return Some(if movie.deleted {
                "uq_movies_deleted_external_id"
            } else {
                "uq_movies_active_external_id"
            });
        }
    }
    None
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn find_active_by_title_contains(
        &self,
        text: &str,
    ) -> Result<Vec<MovieRecord>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .iter()
            .filter(|m| !m.deleted && contains_ignore_case(&m.title, text))
            .cloned()
            .collect())
    }

    async fn find_active_by_title_exact(
        &self,
        title: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        Ok(self.find_one(false, |m| same_title(&m.title, title)).await)
    }

    async fn find_deleted_by_title_exact(
        &self,
        title: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        Ok(self.find_one(true, |m| same_title(&m.title, title)).await)
    }

    async fn find_deleted_by_title_contains(
        &self,
        text: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        Ok(self
            .find_one(true, |m| contains_ignore_case(&m.title, text))
            .await)
    }

    async fn find_active_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        Ok(self.find_one(false, |m| m.external_id == external_id).await)
    }

    async fn find_deleted_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        Ok(self.find_one(true, |m| m.external_id == external_id).await)
    }

    async fn save(&self, mut movie: MovieRecord) -> Result<MovieRecord, StoreError> {
        let mut state = self.state.write().await;

        if let Some(key) = movie.key {
            let stored = state
                .rows
                .iter()
                .find(|m| m.key == Some(key))
                .ok_or_else(|| StoreError::Backend(format!("No movie with key {key}")))?;
            // external_id is immutable once stored.
            movie.external_id = stored.external_id.clone();
        }

        if let Some(index) = violated_index(&state.rows, &movie) {
            return Err(StoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {index}"
            )));
        }

        match movie.key {
            Some(key) => {
                if let Some(slot) = state.rows.iter_mut().find(|m| m.key == Some(key)) {
                    *slot = movie.clone();
                }
            }
            None => {
                state.next_key += 1;
                movie.key = Some(state.next_key);
                state.rows.push(movie.clone());
            }
        }
        Ok(movie)
    }
}
