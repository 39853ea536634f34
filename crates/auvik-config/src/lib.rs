//! Shared configuration for the auvik CLI.
//!
//! TOML profiles, credential resolution (keyring + env + plaintext),
//! and translation to `auvik_core::ServiceConfig`. One profile per MSP
//! account; most installations have exactly one.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use auvik_core::ServiceConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named account profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Days of history each report covers.
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Seconds a cached report stays fresh.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            window_days: default_window_days(),
            cache_ttl: default_cache_ttl(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_window_days() -> i64 {
    30
}
fn default_cache_ttl() -> u64 {
    3600
}

/// A named MSP account profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Auvik region, e.g. "us1", "eu1" (forms the API hostname).
    #[serde(default = "default_region")]
    pub region: String,

    /// Full API base URL override. Takes precedence over `region`.
    pub api_url: Option<String>,

    /// Account username (an email address).
    pub username: Option<String>,

    /// API key (plaintext — prefer keyring or env var).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Domain prefix of the MSP's own Auvik account.
    pub domain_prefix: Option<String>,

    /// Where tenant, cache, and report files live.
    pub data_dir: Option<PathBuf>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// Override report window.
    pub window_days: Option<i64>,

    /// Override cache TTL.
    pub cache_ttl: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            region: default_region(),
            api_url: None,
            username: None,
            api_key: None,
            api_key_env: None,
            domain_prefix: None,
            data_dir: None,
            timeout: None,
            window_days: None,
            cache_ttl: None,
        }
    }
}

fn default_region() -> String {
    "us1".into()
}

/// The API base URL a profile points at.
#[must_use]
pub fn profile_api_url(profile: &Profile) -> String {
    profile.api_url.clone().unwrap_or_else(|| {
        format!("https://auvikapi.{}.my.auvik.com/v1", profile.region)
    })
}

// ── Config and data paths ───────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "msptoolworks", "auvik").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default data directory for profiles that do not set one.
pub fn data_path() -> PathBuf {
    ProjectDirs::from("io", "msptoolworks", "auvik")
        .map_or_else(dirs_fallback, |dirs| dirs.data_dir().to_path_buf())
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("auvik");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("AUVIK_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
#[must_use]
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve an API key from the credential chain (no CLI flag step).
pub fn resolve_api_key(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's api_key_env → env var lookup
    if let Some(ref env_name) = profile.api_key_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new("auvik", &format!("{profile_name}/api-key")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref key) = profile.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve the account username: profile field, then `AUVIK_USERNAME`.
pub fn resolve_username(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    profile
        .username
        .clone()
        .or_else(|| std::env::var("AUVIK_USERNAME").ok())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })
}

/// Build a `ServiceConfig` from a profile — no CLI flag overrides.
pub fn profile_to_service_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ServiceConfig, ConfigError> {
    let raw_url = profile_api_url(profile);
    let base_url: url::Url = raw_url.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {raw_url}"),
    })?;

    let username = resolve_username(profile, profile_name)?;
    let api_key = resolve_api_key(profile, profile_name)?;

    let domain_prefix = profile
        .domain_prefix
        .clone()
        .ok_or_else(|| ConfigError::Validation {
            field: "domain_prefix".into(),
            reason: "profile must name the MSP's own domain prefix".into(),
        })?;

    let data_dir = profile.data_dir.clone().unwrap_or_else(data_path);
    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    let window_days = profile.window_days.unwrap_or(defaults.window_days);
    let cache_ttl = Duration::from_secs(profile.cache_ttl.unwrap_or(defaults.cache_ttl));

    Ok(ServiceConfig {
        base_url,
        username,
        api_key,
        domain_prefix,
        data_dir,
        timeout,
        window_days,
        cache_ttl,
    })
}
