//! Booking service client error types.

/// Errors from the trip-search HTTP client.
///
/// The matrix pipeline treats every variant the same way (the pair is
/// zero-filled); the distinctions exist for the status line.
#[derive(Debug, thiserror::Error)]
pub enum ShohozError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    ///
    /// `body` holds the first 500 characters of the response for debugging.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by booking service")]
    RateLimited,

    /// Client could not be configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl ShohozError {
    /// Whether the failure came from the body rather than the transport.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, ShohozError::Json { .. })
    }
}
