//! [`MovieStore`] backed by Postgres.

use std::collections::HashMap;

use async_trait::async_trait;
use cinedex_core::movie::MovieRecord;
use cinedex_core::store::{MovieStore, StoreError};
use cinedex_core::types::DbId;

use crate::models::movie::{Movie, MovieRating, SaveMovie};
use crate::repositories::MovieRepo;
use crate::DbPool;

/// Postgres-backed store. Cloning shares the pool.
#[derive(Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Load ratings for `movies` and assemble domain records, keeping row order.
    async fn hydrate(&self, movies: Vec<Movie>) -> Result<Vec<MovieRecord>, StoreError> {
        let ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
        let mut by_movie: HashMap<DbId, Vec<MovieRating>> = HashMap::new();
        for rating in MovieRepo::list_ratings(&self.pool, &ids)
            .await
            .map_err(map_sqlx_error)?
        {
            by_movie.entry(rating.movie_id).or_default().push(rating);
        }

        Ok(movies
            .into_iter()
            .map(|m| {
                let ratings = by_movie.remove(&m.id).unwrap_or_default();
                m.into_record(ratings)
            })
            .collect())
    }

    async fn hydrate_one(&self, movie: Option<Movie>) -> Result<Option<MovieRecord>, StoreError> {
        match movie {
            Some(m) => Ok(self.hydrate(vec![m]).await?.pop()),
            None => Ok(None),
        }
    }
}

/// Translate driver errors. Unique-index violations become conflicts.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return StoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
    }
    tracing::error!(error = %err, "Database error");
    StoreError::Backend(err.to_string())
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn find_active_by_title_contains(
        &self,
        text: &str,
    ) -> Result<Vec<MovieRecord>, StoreError> {
        let rows = MovieRepo::find_by_title_contains(&self.pool, text, false)
            .await
            .map_err(map_sqlx_error)?;
        self.hydrate(rows).await
    }

    async fn find_active_by_title_exact(
        &self,
        title: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        let row = MovieRepo::find_by_title_exact(&self.pool, title, false)
            .await
            .map_err(map_sqlx_error)?;
        self.hydrate_one(row).await
    }

    async fn find_deleted_by_title_exact(
        &self,
        title: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        let row = MovieRepo::find_by_title_exact(&self.pool, title, true)
            .await
            .map_err(map_sqlx_error)?;
        self.hydrate_one(row).await
    }

    async fn find_deleted_by_title_contains(
        &self,
        text: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        let row = MovieRepo::find_by_title_contains(&self.pool, text, true)
            .await
            .map_err(map_sqlx_error)?
            .into_iter()
            .next();
        self.hydrate_one(row).await
    }

    async fn find_active_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        let row = MovieRepo::find_by_external_id(&self.pool, external_id, false)
            .await
            .map_err(map_sqlx_error)?;
        self.hydrate_one(row).await
    }

    async fn find_deleted_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<MovieRecord>, StoreError> {
        let row = MovieRepo::find_by_external_id(&self.pool, external_id, true)
            .await
            .map_err(map_sqlx_error)?;
        self.hydrate_one(row).await
    }

    async fn save(&self, movie: MovieRecord) -> Result<MovieRecord, StoreError> {
        let input = SaveMovie::from(&movie);
        let (row, ratings) = MovieRepo::save(&self.pool, movie.key, &input)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.into_record(ratings))
    }
}
