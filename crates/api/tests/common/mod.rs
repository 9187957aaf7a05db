//! Shared harness for API integration tests.
//!
//! Builds the production router over an in-memory store and a canned
//! provider, so the full middleware stack runs without Postgres or OMDb.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinedex_api::config::ServerConfig;
use cinedex_api::router::build_app_router;
use cinedex_api::state::AppState;
use cinedex_core::external_id::SequenceIdSource;
use cinedex_core::memory::InMemoryMovieStore;
use cinedex_core::movie::{same_title, MovieRecord, QuerySummary};
use cinedex_core::provider::{MovieProvider, ProviderError};
use cinedex_core::reconcile::Reconciler;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

// ---------------------------------------------------------------------------
// Canned provider
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Catalog {
    movies: Vec<MovieRecord>,
    searches: HashMap<String, Vec<QuerySummary>>,
    down: bool,
}

/// Provider answering from an in-process catalog.
#[derive(Default)]
pub struct FakeOmdb {
    catalog: Mutex<Catalog>,
}

impl FakeOmdb {
    pub fn add(&self, movie: MovieRecord) {
        self.catalog.lock().unwrap().movies.push(movie);
    }

    pub fn set_search(&self, query: &str, ids: &[&str]) {
        let mut catalog = self.catalog.lock().unwrap();
        let hits = ids
            .iter()
            .filter_map(|id| catalog.movies.iter().find(|m| m.external_id == *id))
            .map(|m| QuerySummary {
                external_id: m.external_id.clone(),
                title: m.title.clone(),
                plot: None,
            })
            .collect();
        catalog.searches.insert(query.to_string(), hits);
    }

    pub fn go_down(&self) {
        self.catalog.lock().unwrap().down = true;
    }

    fn catalog(&self) -> Result<std::sync::MutexGuard<'_, Catalog>, ProviderError> {
        let catalog = self.catalog.lock().unwrap();
        if catalog.down {
            return Err(ProviderError::Unavailable("connection refused".into()));
        }
        Ok(catalog)
    }
}

#[async_trait]
impl MovieProvider for FakeOmdb {
    async fn fetch_by_title(&self, title: &str) -> Result<Option<MovieRecord>, ProviderError> {
        let catalog = self.catalog()?;
        Ok(catalog.movies.iter().find(|m| same_title(&m.title, title)).cloned())
    }

    async fn fetch_by_id(&self, external_id: &str) -> Result<Option<MovieRecord>, ProviderError> {
        let catalog = self.catalog()?;
        Ok(catalog
            .movies
            .iter()
            .find(|m| m.external_id == external_id)
            .cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<QuerySummary>, ProviderError> {
        let catalog = self.catalog()?;
        Ok(catalog.searches.get(query).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "fake-omdb"
    }
}

pub fn omdb_movie(external_id: &str, title: &str, genre: &str) -> MovieRecord {
    MovieRecord {
        external_id: external_id.to_string(),
        title: title.to_string(),
        category: Some(genre.to_string()),
        plot: Some(format!("Plot of {title}")),
        ..MovieRecord::default()
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryMovieStore>,
    pub omdb: Arc<FakeOmdb>,
}

/// Build the full application router with all middleware layers.
///
/// Local IDs are drawn in order (`ttt000001`, `ttt000002`, ...).
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let store = Arc::new(InMemoryMovieStore::new());
    let omdb = Arc::new(FakeOmdb::default());
    let reconciler = Reconciler::new(store.clone(), omdb.clone())
        .with_id_source(Arc::new(SequenceIdSource::new((1..=1000).collect::<Vec<_>>())));

    let state = AppState {
        reconciler: Arc::new(reconciler),
        pool: None,
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        omdb,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: &TestApp, request: Request<Body>) -> Response<Body> {
    app.router.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn patch(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Request::patch(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: &TestApp, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

async fn send_json(
    app: &TestApp,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
