// ── Runtime service configuration ──
//
// Describes *how* to reach the Auvik API and where report data lives on
// disk. Carries credential data and tuning knobs, but never touches disk
// itself. The CLI constructs a `ServiceConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Configuration for a single Auvik MSP account.
///
/// Built by the CLI, passed to `Reporter` -- core never reads config files.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// API base URL including the version segment
    /// (e.g., `https://auvikapi.us1.my.auvik.com/v1`).
    pub base_url: Url,
    /// Account username (an email address).
    pub username: String,
    /// Auvik API key, paired with the username for Basic auth.
    pub api_key: SecretString,
    /// Domain prefix of the MSP's own Auvik account. Tenant discovery is
    /// scoped under it, and it is excluded from client-facing listings.
    pub domain_prefix: String,
    /// Directory holding the tenant directory, report cache, and rendered
    /// report artifacts.
    pub data_dir: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Days of history each report covers.
    pub window_days: i64,
    /// How long a cached report stays fresh.
    pub cache_ttl: Duration,
}
