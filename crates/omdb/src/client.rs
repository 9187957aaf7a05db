//! HTTP client for the OMDb API.
//!
//! OMDb exposes a single endpoint; the operation is chosen by query
//! parameter (`t` title, `i` IMDb ID, `s` search). Every request carries
//! the `apikey` parameter.

use serde::de::DeserializeOwned;

use crate::config::OmdbConfig;
use crate::error::OmdbError;
use crate::models::{OmdbMovie, OmdbSearchItem, OmdbSearchResponse};

pub struct OmdbClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Build a client with its own connection pool and the configured timeout.
    pub fn new(config: &OmdbConfig) -> Result<Self, OmdbError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(
            client,
            config.api_url.clone(),
            config.api_key.clone(),
        ))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Look a movie up by title. `None` when OMDb reports no match.
    pub async fn by_title(&self, title: &str) -> Result<Option<OmdbMovie>, OmdbError> {
        let movie: OmdbMovie = self.get(&[("t", title)]).await?;
        Ok(movie.is_found().then_some(movie))
    }

    /// Fetch a movie by IMDb ID with the short plot.
    pub async fn by_id(&self, imdb_id: &str) -> Result<Option<OmdbMovie>, OmdbError> {
        let movie: OmdbMovie = self.get(&[("i", imdb_id), ("plot", "short")]).await?;
        Ok(movie.is_found().then_some(movie))
    }

    /// Free-text search. An empty list when OMDb reports no results.
    pub async fn search(&self, query: &str) -> Result<Vec<OmdbSearchItem>, OmdbError> {
        let response: OmdbSearchResponse = self.get(&[("s", query)]).await?;
        if !response.is_found() {
            tracing::debug!(%query, reason = ?response.error, "OMDb search returned nothing");
            return Ok(Vec::new());
        }
        Ok(response.search)
    }

    // ---- private helpers ----

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, OmdbError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "OMDb request failed");
            return Err(OmdbError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
