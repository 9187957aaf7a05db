//! Query parameter types for the movie endpoints.
//!
//! Names follow the public API (`imdbID`, `title`, `query`, `category`).

use cinedex_core::error::CoreError;
use cinedex_core::external_id::validate_external_id;
use serde::Deserialize;

/// `?imdbID=` for update and delete.
#[derive(Debug, Deserialize)]
pub struct ImdbIdParams {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

impl ImdbIdParams {
    /// The ID, if it has the provider or local format.
    pub fn validated(&self) -> Result<&str, CoreError> {
        validate_external_id(&self.imdb_id)?;
        Ok(&self.imdb_id)
    }
}

/// `?title=` for enable and rating.
#[derive(Debug, Deserialize)]
pub struct TitleParams {
    pub title: String,
}

/// `?query=` for free-text search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// `?query=&category=` for category search.
#[derive(Debug, Deserialize)]
pub struct CategorySearchParams {
    pub query: String,
    pub category: String,
}
