// ── Core error type ──

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by core services.
///
/// API failures pass through unchanged so callers can still distinguish
/// transport, decode, and pagination faults; everything the core adds on
/// top of the wire (directory, store, cache) gets its own variant.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying API client error.
    #[error(transparent)]
    Api(#[from] auvik_api::Error),

    /// Domain prefix not present in the tenant directory, even after a
    /// fresh sync.
    #[error("unknown tenant domain: {domain}")]
    TenantNotFound { domain: String },

    /// Filesystem failure in the data directory.
    #[error("storage error at {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file exists but does not hold what we expect.
    #[error("malformed data file {}: {source}", path.display())]
    StoreEncoding {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid service configuration.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// True when retrying the same call might succeed (network blips,
    /// timeouts).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_transient())
    }

    /// True when the API rejected our credentials.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Api(api) if api.is_auth())
    }
}
