//! Movie and rating rows.

use cinedex_core::movie::{MovieRecord, Rating};
use cinedex_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub external_id: String,
    pub title: String,
    pub release_year: Option<String>,
    pub category: Option<String>,
    pub plot: Option<String>,
    pub awards: Option<String>,
    pub is_updated: bool,
    pub is_deleted: bool,
    pub previous_title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `ratings` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRating {
    pub id: DbId,
    pub movie_id: DbId,
    pub position: i32,
    pub source: String,
    pub value: String,
}

/// Full replacement of a movie row and its ratings.
#[derive(Debug, Clone)]
pub struct SaveMovie {
    pub external_id: String,
    pub title: String,
    pub release_year: Option<String>,
    pub category: Option<String>,
    pub plot: Option<String>,
    pub awards: Option<String>,
    pub is_updated: bool,
    pub is_deleted: bool,
    pub previous_title: Option<String>,
    pub ratings: Vec<Rating>,
}

impl From<&MovieRecord> for SaveMovie {
    fn from(m: &MovieRecord) -> Self {
        Self {
            external_id: m.external_id.clone(),
            title: m.title.clone(),
            release_year: m.release_year.clone(),
            category: m.category.clone(),
            plot: m.plot.clone(),
            awards: m.awards.clone(),
            is_updated: m.updated,
            is_deleted: m.deleted,
            previous_title: m.previous_title.clone(),
            ratings: m.ratings.clone(),
        }
    }
}

impl Movie {
    /// Assemble the domain record. `ratings` must already be in position order.
    pub fn into_record(self, ratings: Vec<MovieRating>) -> MovieRecord {
        MovieRecord {
            key: Some(self.id),
            external_id: self.external_id,
            title: self.title,
            release_year: self.release_year,
            category: self.category,
            plot: self.plot,
            ratings: ratings
                .into_iter()
                .map(|r| Rating::new(r.source, r.value))
                .collect(),
            awards: self.awards,
            updated: self.is_updated,
            deleted: self.is_deleted,
            previous_title: self.previous_title,
        }
    }
}
