//! Movie records, ratings, and the text-matching rules shared by every store.
//!
//! Field names on the wire follow the provider's casing (`Title`, `imdbID`,
//! `Ratings`, ...) so records fetched from the provider and records read from
//! the local catalog serialize identically.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Text matching
// ---------------------------------------------------------------------------

/// Case-insensitive title equality.
pub fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring match of `needle` inside `haystack`.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `true` when the value is missing or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Return an owned copy of `value` unless it is blank.
fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// A single score attached to a movie. Both fields are opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Rating {
    pub fn new(source: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            value: value.into(),
        }
    }
}

/// Pairwise comparison by position on `source` and `value`.
pub fn ratings_equal(a: &[Rating], b: &[Rating]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

// ---------------------------------------------------------------------------
// MovieRecord
// ---------------------------------------------------------------------------

/// The canonical movie entity.
///
/// `key` is assigned by the store on first save and is never serialized;
/// lookups always go through `title` or `external_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(skip)]
    pub key: Option<DbId>,
    #[serde(rename = "imdbID", default)]
    pub external_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Released", default)]
    pub release_year: Option<String>,
    #[serde(rename = "Category", alias = "Genre", default)]
    pub category: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "is_updated", default)]
    pub updated: bool,
    #[serde(rename = "is_deleted", default)]
    pub deleted: bool,
    #[serde(rename = "previous_title", default)]
    pub previous_title: Option<String>,
}

impl MovieRecord {
    /// Project the record into a search summary.
    pub fn summary(&self) -> QuerySummary {
        QuerySummary {
            external_id: self.external_id.clone(),
            title: self.title.clone(),
            plot: self.plot.clone(),
        }
    }

    /// Case-sensitive category substring match. Records without a category
    /// never match.
    pub fn category_contains(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.contains(category))
    }

    /// Whether the provider gave us something usable (a non-blank title).
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Copy this record as a fresh, unpersisted local row with the
    /// lifecycle flags reset.
    pub fn detached(&self) -> Self {
        Self {
            key: None,
            updated: false,
            deleted: false,
            previous_title: None,
            ..self.clone()
        }
    }

    /// Overwrite descriptive fields with every non-blank proposed value.
    ///
    /// A non-empty rating list replaces the whole collection; an empty one
    /// keeps the current ratings.
    pub fn overlay(&mut self, proposed: &MovieInput) {
        if let Some(title) = non_blank(&proposed.title) {
            self.title = title;
        }
        if let Some(category) = non_blank(&proposed.category) {
            self.category = Some(category);
        }
        if let Some(plot) = non_blank(&proposed.plot) {
            self.plot = Some(plot);
        }
        if let Some(awards) = non_blank(&proposed.awards) {
            self.awards = Some(awards);
        }
        if let Some(release_year) = non_blank(&proposed.release_year) {
            self.release_year = Some(release_year);
        }
        if !proposed.ratings.is_empty() {
            self.ratings = proposed.ratings.clone();
        }
    }
}

// ---------------------------------------------------------------------------
// MovieInput
// ---------------------------------------------------------------------------

/// Caller-supplied field values for create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Released", default)]
    pub release_year: Option<String>,
    #[serde(rename = "Category", alias = "Genre", default)]
    pub category: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
}

impl MovieInput {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Field-for-field equality against a stored record, exact text and
    /// pairwise ratings.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        self.title.as_deref() == Some(movie.title.as_str())
            && self.category == movie.category
            && self.plot == movie.plot
            && self.awards == movie.awards
            && self.release_year == movie.release_year
            && ratings_equal(&self.ratings, &movie.ratings)
    }

    /// Build an unpersisted record from the non-blank fields.
    pub fn to_record(&self, external_id: String) -> MovieRecord {
        MovieRecord {
            key: None,
            external_id,
            title: self.title.clone().unwrap_or_default(),
            release_year: non_blank(&self.release_year),
            category: non_blank(&self.category),
            plot: non_blank(&self.plot),
            ratings: self.ratings.clone(),
            awards: non_blank(&self.awards),
            updated: false,
            deleted: false,
            previous_title: None,
        }
    }
}

// ---------------------------------------------------------------------------
// QuerySummary
// ---------------------------------------------------------------------------

/// Lightweight projection returned by query search. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySummary {
    #[serde(rename = "imdbID")]
    pub external_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Plot", skip_serializing_if = "Option::is_none", default)]
    pub plot: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> MovieRecord {
        MovieRecord {
            key: Some(1),
            external_id: "tt1375666".into(),
            title: "Inception".into(),
            release_year: Some("2010".into()),
            category: Some("Action, Sci-Fi".into()),
            plot: Some("A thief who steals corporate secrets.".into()),
            ratings: vec![Rating::new("Internet Movie Database", "8.8/10")],
            awards: None,
            ..MovieRecord::default()
        }
    }

    fn same_as_stored() -> MovieInput {
        MovieInput {
            title: Some("Inception".into()),
            release_year: Some("2010".into()),
            category: Some("Action, Sci-Fi".into()),
            plot: Some("A thief who steals corporate secrets.".into()),
            awards: None,
            ratings: vec![Rating::new("Internet Movie Database", "8.8/10")],
        }
    }

    #[test]
    fn title_matching_ignores_case() {
        assert!(same_title("Inception", "INCEPTION"));
        assert!(!same_title("Inception", "Inception 2"));
        assert!(contains_ignore_case("The Matrix Reloaded", "matrix"));
        assert!(!contains_ignore_case("Heat", "matrix"));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(None));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some(" x ")));
    }

    #[test]
    fn identical_input_matches() {
        assert!(same_as_stored().matches(&stored()));
    }

    #[test]
    fn rating_value_difference_breaks_match() {
        let mut input = same_as_stored();
        input.ratings[0].value = "9/10".into();
        assert!(!input.matches(&stored()));
    }

    #[test]
    fn rating_order_matters() {
        let a = vec![Rating::new("A", "1"), Rating::new("B", "2")];
        let b = vec![Rating::new("B", "2"), Rating::new("A", "1")];
        assert!(!ratings_equal(&a, &b));
        assert!(ratings_equal(&a, &a.clone()));
    }

    #[test]
    fn title_match_is_case_sensitive_for_change_detection() {
        let mut input = same_as_stored();
        input.title = Some("inception".into());
        assert!(!input.matches(&stored()));
    }

    #[test]
    fn overlay_keeps_existing_values_for_blank_fields() {
        let mut movie = stored();
        let proposed = MovieInput {
            title: Some("Inception 2".into()),
            plot: Some("  ".into()),
            ..MovieInput::default()
        };
        movie.overlay(&proposed);
        assert_eq!(movie.title, "Inception 2");
        assert_eq!(movie.plot.as_deref(), Some("A thief who steals corporate secrets."));
        assert_eq!(movie.ratings.len(), 1);
    }

    #[test]
    fn overlay_replaces_ratings_when_supplied() {
        let mut movie = stored();
        let proposed = MovieInput {
            ratings: vec![Rating::new("Metacritic", "74/100"), Rating::new("IMDB", "9/10")],
            ..MovieInput::default()
        };
        movie.overlay(&proposed);
        assert_eq!(movie.ratings.len(), 2);
        assert_eq!(movie.ratings[0].source, "Metacritic");
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let movie = stored();
        assert!(movie.category_contains("Sci-Fi"));
        assert!(!movie.category_contains("sci-fi"));
        assert!(!MovieRecord::default().category_contains("Drama"));
    }

    #[test]
    fn detached_resets_lifecycle_flags() {
        let mut movie = stored();
        movie.updated = true;
        movie.deleted = true;
        movie.previous_title = Some("Old".into());
        let copy = movie.detached();
        assert_eq!(copy.key, None);
        assert!(!copy.updated && !copy.deleted);
        assert_eq!(copy.previous_title, None);
        assert_eq!(copy.title, "Inception");
    }

    #[test]
    fn to_record_drops_blank_fields() {
        let input = MovieInput {
            title: Some("Local Film".into()),
            plot: Some("".into()),
            awards: Some("Best Short".into()),
            ..MovieInput::default()
        };
        let movie = input.to_record("ttt000042".into());
        assert_eq!(movie.external_id, "ttt000042");
        assert_eq!(movie.plot, None);
        assert_eq!(movie.awards.as_deref(), Some("Best Short"));
    }

    #[test]
    fn genre_alias_deserializes_into_category() {
        let movie: MovieRecord =
            serde_json::from_str(r#"{"Title":"Heat","imdbID":"tt0113277","Genre":"Crime"}"#)
                .unwrap();
        assert_eq!(movie.category.as_deref(), Some("Crime"));
    }

    #[test]
    fn key_is_never_serialized() {
        let json = serde_json::to_value(stored()).unwrap();
        assert!(json.get("key").is_none());
        assert_eq!(json["imdbID"], "tt1375666");
        assert_eq!(json["Category"], "Action, Sci-Fi");
        assert_eq!(json["is_deleted"], false);
    }
}
