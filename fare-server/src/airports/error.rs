//! Airport directory error types.

/// Errors that can occur when fetching the airport directory.
#[derive(Debug, thiserror::Error)]
pub enum AirportError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
