use cinedex_core::provider::ProviderError;

/// Errors from the OMDb client.
#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OMDb returned a non-2xx status code.
    #[error("OMDb API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not the JSON shape we expect.
    #[error("Invalid OMDb response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<OmdbError> for ProviderError {
    fn from(err: OmdbError) -> Self {
        match err {
            OmdbError::Json(_) => ProviderError::Malformed(err.to_string()),
            OmdbError::Request(_) | OmdbError::Api { .. } => {
                ProviderError::Unavailable(err.to_string())
            }
        }
    }
}
