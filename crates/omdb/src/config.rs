use std::time::Duration;

/// Default OMDb endpoint. Every call is a `GET` on this URL with query params.
pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// OMDb connection settings.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// Base URL (default: [`DEFAULT_API_URL`]).
    pub api_url: String,
    /// API key sent as the `apikey` query parameter.
    pub api_key: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl OmdbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var             | Default                     |
    /// |---------------------|-----------------------------|
    /// | `OMDB_API_URL`      | `https://www.omdbapi.com/`  |
    /// | `OMDB_API_KEY`      | required                    |
    /// | `OMDB_TIMEOUT_SECS` | `10`                        |
    pub fn from_env() -> Self {
        let api_url = std::env::var("OMDB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let api_key = std::env::var("OMDB_API_KEY").expect("OMDB_API_KEY must be set");

        let timeout_secs: u64 = std::env::var("OMDB_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("OMDB_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            api_key,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
