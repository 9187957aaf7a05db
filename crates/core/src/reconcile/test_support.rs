//! Scripted collaborators for engine tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::Reconciler;
use crate::external_id::SequenceIdSource;
use crate::memory::InMemoryMovieStore;
use crate::movie::{same_title, MovieRecord, QuerySummary};
use crate::provider::{MovieProvider, ProviderError};
use crate::store::MovieStore;

/// A provider-shaped record with a predictable plot.
pub fn movie(external_id: &str, title: &str) -> MovieRecord {
    MovieRecord {
        external_id: external_id.to_string(),
        title: title.to_string(),
        plot: Some(format!("Plot of {title}")),
        ..MovieRecord::default()
    }
}

#[derive(Default)]
struct Script {
    by_title: Vec<(String, MovieRecord)>,
    by_id: HashMap<String, MovieRecord>,
    searches: HashMap<String, Vec<QuerySummary>>,
    failing: bool,
}

/// Provider answering from canned data.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<Script>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    /// Make `movie` resolvable by its title and by its ID.
    pub fn add(&self, movie: MovieRecord) {
        let mut script = self.script.lock().unwrap();
        script.by_title.push((movie.title.clone(), movie.clone()));
        script.by_id.insert(movie.external_id.clone(), movie);
    }

    /// Answer title lookups for `title` with `movie`, whatever its title.
    pub fn add_for_title(&self, title: &str, movie: MovieRecord) {
        let mut script = self.script.lock().unwrap();
        script.by_title.push((title.to_string(), movie));
    }

    pub fn set_search(&self, query: &str, hits: &[(&str, &str)]) {
        let hits = hits
            .iter()
            .map(|(id, title)| QuerySummary {
                external_id: id.to_string(),
                title: title.to_string(),
                plot: None,
            })
            .collect();
        self.script
            .lock()
            .unwrap()
            .searches
            .insert(query.to_string(), hits);
    }

    /// Every subsequent call fails.
    pub fn fail(&self) {
        self.script.lock().unwrap().failing = true;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, Script>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self.script.lock().unwrap();
        if script.failing {
            return Err(ProviderError::Unavailable("connection refused".into()));
        }
        Ok(script)
    }
}

#[async_trait]
impl MovieProvider for ScriptedProvider {
    async fn fetch_by_title(&self, title: &str) -> Result<Option<MovieRecord>, ProviderError> {
        let script = self.enter()?;
        Ok(script
            .by_title
            .iter()
            .find(|(t, _)| same_title(t, title))
            .map(|(_, m)| m.clone()))
    }

    async fn fetch_by_id(&self, external_id: &str) -> Result<Option<MovieRecord>, ProviderError> {
        let script = self.enter()?;
        Ok(script.by_id.get(external_id).cloned())
    }

    async fn search(&self, query: &str) -> Result<Vec<QuerySummary>, ProviderError> {
        let script = self.enter()?;
        Ok(script.searches.get(query).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Engine wired to an in-memory store and a scripted provider.
pub struct Harness {
    pub store: Arc<InMemoryMovieStore>,
    pub provider: Arc<ScriptedProvider>,
    pub engine: Reconciler,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryMovieStore::new());
        let provider = Arc::new(ScriptedProvider::default());
        let engine = Reconciler::new(store.clone(), provider.clone())
            .with_id_source(Arc::new(SequenceIdSource::new((1..=100).collect::<Vec<_>>())));
        Self {
            store,
            provider,
            engine,
        }
    }

    pub async fn seed(&self, movie: MovieRecord) -> MovieRecord {
        self.store.save(movie).await.unwrap()
    }

    pub async fn seed_deleted(&self, mut movie: MovieRecord) -> MovieRecord {
        movie.deleted = true;
        self.store.save(movie).await.unwrap()
    }

    /// Stored records with this title, active and deleted.
    pub async fn stored_titled(&self, title: &str) -> Vec<MovieRecord> {
        self.store
            .snapshot()
            .await
            .into_iter()
            .filter(|m| same_title(&m.title, title))
            .collect()
    }
}
