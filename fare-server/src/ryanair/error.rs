//! Ryanair client error types.

use std::fmt;

/// Errors from the Ryanair HTTP client.
#[derive(Debug)]
pub enum RyanairError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,
}

impl fmt::Display for RyanairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RyanairError::Http(e) => write!(f, "HTTP error: {e}"),
            RyanairError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            RyanairError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            RyanairError::RateLimited => write!(f, "rate limited by Ryanair API"),
        }
    }
}

impl std::error::Error for RyanairError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RyanairError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RyanairError {
    fn from(err: reqwest::Error) -> Self {
        RyanairError::Http(err)
    }
}
