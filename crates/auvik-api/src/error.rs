use thiserror::Error;

/// Top-level error type for the `auvik-api` crate.
///
/// Every failure is fatal to the request chain that produced it: the
/// client never retries and never returns partial page sets.
/// `auvik-core` carries these through to user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or non-success HTTP status for a request.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response body was not JSON or did not match the expected shape.
    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A pagination `next` link pointed back at an already-fetched URL.
    #[error("circular pagination detected at {url}")]
    CircularPagination { url: String },

    /// URL parsing error (bad base URL or malformed `next` link).
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP client construction failed.
    #[error("client error: {0}")]
    Client(String),
}

impl Error {
    /// Returns `true` if this is a transient error a caller might retry.
    /// The client itself never retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Fetch { source, .. } => source.is_timeout() || source.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if the server rejected our credentials.
    pub fn is_auth(&self) -> bool {
        match self {
            Self::Fetch { source, .. } => matches!(
                source.status(),
                Some(reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN)
            ),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" response.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Fetch { source, .. } => source.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Fetch { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}
