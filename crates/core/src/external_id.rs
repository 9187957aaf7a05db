//! External ID formats and generation of catalog-local IDs.
//!
//! Provider IDs look like `tt1375666` (`tt` + 7 digits). Records created
//! locally get `ttt` + 6 zero-padded digits so they can never collide with a
//! provider ID.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::error::CoreError;
use crate::store::MovieStore;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Prefix reserved for locally generated IDs.
pub const LOCAL_ID_PREFIX: &str = "ttt";

/// Upper bound (exclusive) of the numeric part of a local ID.
pub const LOCAL_ID_SPACE: u32 = 1_000_000;

/// Attempts before ID generation gives up.
pub const MAX_ID_ATTEMPTS: u32 = 1_000;

static PROVIDER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^tt\d{7}$").expect("valid regex"));

static ACCEPTED_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(tt\d{7}|ttt\d{6})$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Format checks
// ---------------------------------------------------------------------------

/// Whether `id` has the provider's format (and may be fetched remotely).
pub fn is_provider_id(id: &str) -> bool {
    PROVIDER_ID_RE.is_match(id)
}

/// Validate an ID supplied by a caller: provider format or local format.
pub fn validate_external_id(id: &str) -> Result<(), CoreError> {
    if ACCEPTED_ID_RE.is_match(id) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid imdbID '{id}'. Expected 'tt' followed by 7 digits or 'ttt' followed by 6 digits"
        )))
    }
}

/// Render the local ID for a number. Values wrap into the ID space.
pub fn format_local_id(number: u32) -> String {
    let number = number % LOCAL_ID_SPACE;
    format!("{LOCAL_ID_PREFIX}{number:06}")
}

// ---------------------------------------------------------------------------
// Randomness
// ---------------------------------------------------------------------------

/// Source of candidate numbers for local IDs.
pub trait IdSource: Send + Sync {
    fn next_number(&self) -> u32;
}

/// Thread-local RNG, uniform over the ID space.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_number(&self) -> u32 {
        rand::rng().random_range(0..LOCAL_ID_SPACE)
    }
}

/// Replays a fixed list of numbers, cycling when exhausted.
#[derive(Debug)]
pub struct SequenceIdSource {
    numbers: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceIdSource {
    pub fn new(numbers: impl Into<Vec<u32>>) -> Self {
        Self {
            numbers: numbers.into(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl IdSource for SequenceIdSource {
    fn next_number(&self) -> u32 {
        if self.numbers.is_empty() {
            return 0;
        }
        let at = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.numbers[at % self.numbers.len()]
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Draw local IDs until one is not held by an active record.
///
/// Gives up with [`CoreError::Internal`] after [`MAX_ID_ATTEMPTS`] draws.
pub async fn generate_unique_id(
    store: &dyn MovieStore,
    source: &dyn IdSource,
) -> Result<String, CoreError> {
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let candidate = format_local_id(source.next_number());
        if !store.exists_active_by_external_id(&candidate).await? {
            if attempt > 1 {
                tracing::debug!(%candidate, attempt, "Generated local ID after collisions");
            }
            return Ok(candidate);
        }
    }
    tracing::error!(attempts = MAX_ID_ATTEMPTS, "Local ID space exhausted");
    Err(CoreError::Internal(format!(
        "Could not generate a unique imdbID after {MAX_ID_ATTEMPTS} attempts"
    )))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
