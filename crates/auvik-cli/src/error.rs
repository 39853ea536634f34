//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use auvik_config::ConfigError;
use auvik_core::CoreError;

/// Process exit codes, one per failure class.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the Auvik API")]
    #[diagnostic(
        code(auvik::connection_failed),
        help(
            "Check network connectivity and the configured base URL.\n\
             Try: auvik tenants list -vv"
        )
    )]
    Connection {
        #[source]
        source: auvik_api::Error,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(auvik::timeout),
        help("Increase --timeout or check Auvik API responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(auvik::auth_failed),
        help(
            "Verify the username and API key for profile '{profile}'.\n\
             Keys are issued per-user at Settings > Integrations > API keys.\n\
             Run: auvik config init"
        )
    )]
    AuthFailed { profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(auvik::no_credentials),
        help(
            "Configure credentials with: auvik config init\n\
             Or set the AUVIK_USERNAME and AUVIK_API_KEY environment variables."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("Tenant '{domain}' not found")]
    #[diagnostic(
        code(auvik::tenant_not_found),
        help("Run: auvik tenants list to see available tenant domains")
    )]
    TenantNotFound { domain: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(auvik::api_error))]
    Api(auvik_api::Error),

    // ── Core services ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(auvik::core))]
    Core(CoreError),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(auvik::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(auvik::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: auvik config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(auvik::no_config),
        help(
            "Create one with: auvik config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(auvik::config))]
    ConfigLoad(ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(auvik::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Connection { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::TenantNotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TenantNotFound { domain } => Self::TenantNotFound { domain },

            CoreError::Api(api) => {
                if api.is_auth() {
                    Self::AuthFailed {
                        profile: "current".into(),
                    }
                } else if api.is_timeout() {
                    Self::Timeout
                } else if api.is_transient() {
                    Self::Connection { source: api }
                } else {
                    Self::Api(api)
                }
            }

            other => Self::Core(other),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::ConfigLoad(other),
        }
    }
}
