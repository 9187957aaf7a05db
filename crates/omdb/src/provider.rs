//! [`MovieProvider`] backed by OMDb.

use async_trait::async_trait;
use cinedex_core::movie::{MovieRecord, QuerySummary, Rating};
use cinedex_core::provider::{MovieProvider, ProviderError};

use crate::client::OmdbClient;
use crate::models::{available, OmdbMovie, OmdbSearchItem};

pub struct OmdbProvider {
    client: OmdbClient,
}

impl OmdbProvider {
    pub fn new(client: OmdbClient) -> Self {
        Self { client }
    }
}

/// Map an OMDb detail payload onto the catalog record shape. The result is
/// unpersisted and has every lifecycle flag cleared.
pub fn to_record(movie: OmdbMovie) -> MovieRecord {
    MovieRecord {
        key: None,
        external_id: available(movie.imdb_id).unwrap_or_default(),
        title: available(movie.title).unwrap_or_default(),
        release_year: available(movie.released),
        category: available(movie.genre),
        plot: available(movie.plot),
        ratings: movie
            .ratings
            .into_iter()
            .map(|r| Rating::new(r.source, r.value))
            .collect(),
        awards: available(movie.awards),
        updated: false,
        deleted: false,
        previous_title: None,
    }
}

pub fn to_summary(item: OmdbSearchItem) -> QuerySummary {
    QuerySummary {
        external_id: item.imdb_id,
        title: item.title,
        plot: None,
    }
}

#[async_trait]
impl MovieProvider for OmdbProvider {
    async fn fetch_by_title(&self, title: &str) -> Result<Option<MovieRecord>, ProviderError> {
        Ok(self.client.by_title(title).await?.map(to_record))
    }

    async fn fetch_by_id(&self, external_id: &str) -> Result<Option<MovieRecord>, ProviderError> {
        Ok(self.client.by_id(external_id).await?.map(to_record))
    }

    async fn search(&self, query: &str) -> Result<Vec<QuerySummary>, ProviderError> {
        let items = self.client.search(query).await?;
        Ok(items.into_iter().map(to_summary).collect())
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
