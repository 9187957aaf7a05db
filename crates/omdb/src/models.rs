//! OMDb wire types.
//!
//! OMDb always answers 200 and signals "not found" with
//! `"Response": "False"` plus an `Error` message. Missing values are the
//! literal string `"N/A"`.

use serde::Deserialize;

/// Placeholder OMDb uses for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Detail payload for `?t=` and `?i=` lookups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<OmdbRating>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Payload for `?s=` searches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
}

/// `false` only for an explicit `"Response": "False"`.
fn answered(response: Option<&str>) -> bool {
    !response.is_some_and(|r| r.eq_ignore_ascii_case("false"))
}

impl OmdbMovie {
    pub fn is_found(&self) -> bool {
        answered(self.response.as_deref())
    }
}

impl OmdbSearchResponse {
    pub fn is_found(&self) -> bool {
        answered(self.response.as_deref())
    }
}

/// `None` for missing, blank, or `"N/A"` values.
pub fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_AVAILABLE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_detail_payload() {
        let body = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Released": "16 Jul 2010",
            "Genre": "Action, Adventure, Sci-Fi",
            "Plot": "A thief who steals corporate secrets...",
            "Awards": "Won 4 Oscars. 159 wins & 220 nominations total",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.8/10"},
                {"Source": "Rotten Tomatoes", "Value": "87%"}
            ],
            "imdbID": "tt1375666",
            "Type": "movie",
            "Response": "True"
        }"#;

        let movie: OmdbMovie = serde_json::from_str(body).unwrap();

        assert!(movie.is_found());
        assert_eq!(movie.imdb_id.as_deref(), Some("tt1375666"));
        assert_eq!(movie.genre.as_deref(), Some("Action, Adventure, Sci-Fi"));
        assert_eq!(movie.ratings.len(), 2);
        assert_eq!(movie.ratings[1].value, "87%");
    }

    #[test]
    fn not_found_payload() {
        let movie: OmdbMovie =
            serde_json::from_str(r#"{"Response":"False","Error":"Movie not found!"}"#).unwrap();
        assert!(!movie.is_found());
        assert_eq!(movie.error.as_deref(), Some("Movie not found!"));
        assert!(movie.title.is_none());
    }

    #[test]
    fn parses_search_payload() {
        let body = r#"{
            "Search": [
                {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Type": "movie", "Poster": "N/A"},
                {"Title": "Aliens", "Year": "1986", "imdbID": "tt0090605", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let response: OmdbSearchResponse = serde_json::from_str(body).unwrap();

        assert!(response.is_found());
        assert_eq!(response.search.len(), 2);
        assert_eq!(response.search[1].imdb_id, "tt0090605");
        assert_eq!(response.search[0].kind.as_deref(), Some("movie"));
    }

    #[test]
    fn empty_search_payload() {
        let response: OmdbSearchResponse =
            serde_json::from_str(r#"{"Response":"False","Error":"Too many results."}"#).unwrap();
        assert!(!response.is_found());
        assert!(response.search.is_empty());
    }

    #[test]
    fn na_values_are_dropped() {
        assert_eq!(available(Some("N/A".into())), None);
        assert_eq!(available(Some("  ".into())), None);
        assert_eq!(available(None), None);
        assert_eq!(available(Some("2010".into())).as_deref(), Some("2010"));
    }
}
