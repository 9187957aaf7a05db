//! Repository for the `movies` and `ratings` tables.

use sqlx::PgPool;
use cinedex_core::types::DbId;

use crate::models::movie::{Movie, MovieRating, SaveMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, external_id, title, release_year, category, plot, awards, \
    is_updated, is_deleted, previous_title, created_at, updated_at";

const RATING_COLUMNS: &str = "id, movie_id, position, source, value";

/// Title and external-ID lookups scoped to one view (`is_deleted`), plus the
/// transactional save path.
pub struct MovieRepo;

impl MovieRepo {
    /// Rows whose title contains `text` (case-insensitive), ordered by id.
    pub async fn find_by_title_contains(
        pool: &PgPool,
        text: &str,
        deleted: bool,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE is_deleted = $2 AND strpos(lower(title), lower($1)) > 0 \
             ORDER BY id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(text)
            .bind(deleted)
            .fetch_all(pool)
            .await
    }

    /// The row whose title equals `title` (case-insensitive).
    pub async fn find_by_title_exact(
        pool: &PgPool,
        title: &str,
        deleted: bool,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE is_deleted = $2 AND lower(title) = lower($1) \
             ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(title)
            .bind(deleted)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: &str,
        deleted: bool,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE is_deleted = $2 AND external_id = $1 \
             ORDER BY id LIMIT 1"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(external_id)
            .bind(deleted)
            .fetch_optional(pool)
            .await
    }

    /// Ratings for all given movies, ordered by movie then position.
    pub async fn list_ratings(
        pool: &PgPool,
        movie_ids: &[DbId],
    ) -> Result<Vec<MovieRating>, sqlx::Error> {
        if movie_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {RATING_COLUMNS} FROM ratings \
             WHERE movie_id = ANY($1) \
             ORDER BY movie_id, position"
        );
        sqlx::query_as::<_, MovieRating>(&query)
            .bind(movie_ids)
            .fetch_all(pool)
            .await
    }

    /// Insert (`id = None`) or fully rewrite a movie and its ratings in one
    /// transaction. `external_id` is never changed on update.
    ///
    /// Updating a missing id yields `sqlx::Error::RowNotFound`.
    pub async fn save(
        pool: &PgPool,
        id: Option<DbId>,
        input: &SaveMovie,
    ) -> Result<(Movie, Vec<MovieRating>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let movie = match id {
            None => {
                let query = format!(
                    "INSERT INTO movies (external_id, title, release_year, category, plot, \
                         awards, is_updated, is_deleted, previous_title) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(&input.external_id)
                    .bind(&input.title)
                    .bind(&input.release_year)
                    .bind(&input.category)
                    .bind(&input.plot)
                    .bind(&input.awards)
                    .bind(input.is_updated)
                    .bind(input.is_deleted)
                    .bind(&input.previous_title)
                    .fetch_one(&mut *tx)
                    .await?
            }
            Some(id) => {
                let query = format!(
                    "UPDATE movies SET \
                         title = $2, release_year = $3, category = $4, plot = $5, \
                         awards = $6, is_updated = $7, is_deleted = $8, \
                         previous_title = $9, updated_at = now() \
                     WHERE id = $1 \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(id)
                    .bind(&input.title)
                    .bind(&input.release_year)
                    .bind(&input.category)
                    .bind(&input.plot)
                    .bind(&input.awards)
                    .bind(input.is_updated)
                    .bind(input.is_deleted)
                    .bind(&input.previous_title)
                    .fetch_optional(&mut *tx)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?
            }
        };

        sqlx::query("DELETE FROM ratings WHERE movie_id = $1")
            .bind(movie.id)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO ratings (movie_id, position, source, value) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {RATING_COLUMNS}"
        );
        let mut ratings = Vec::with_capacity(input.ratings.len());
        for (position, rating) in input.ratings.iter().enumerate() {
            let row = sqlx::query_as::<_, MovieRating>(&insert)
                .bind(movie.id)
                .bind(position as i32)
                .bind(&rating.source)
                .bind(&rating.value)
                .fetch_one(&mut *tx)
                .await?;
            ratings.push(row);
        }

        tx.commit().await?;
        Ok((movie, ratings))
    }
}
