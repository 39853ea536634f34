//! Profile selection and CLI flag overrides.
//!
//! `auvik-config` owns the TOML file and the credential chain; this
//! module picks the active profile and layers the global flags on top
//! before handing a `ServiceConfig` to the core.

use auvik_config::{Config, Profile, profile_to_service_config};
use auvik_core::ServiceConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// The profile name to use: `--profile` flag, then the config file's
/// `default_profile`, then `"default"`.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ServiceConfig` from the config file, profile, and CLI
/// overrides.
pub fn resolve_service_config(global: &GlobalOpts) -> Result<ServiceConfig, CliError> {
    let cfg = auvik_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let Some(profile) = cfg.profiles.get(&profile_name) else {
        if cfg.profiles.is_empty() {
            return Err(CliError::NoConfig {
                path: auvik_config::config_path().display().to_string(),
            });
        }
        let available: Vec<_> = cfg.profiles.keys().cloned().collect();
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available.join(", "),
        });
    };

    // Flag credentials beat the profile's whole credential chain, so an
    // explicit --api-key also disables the profile's env-var indirection.
    let patched = Profile {
        region: profile.region.clone(),
        api_url: global.base_url.clone().or_else(|| profile.api_url.clone()),
        username: global.username.clone().or_else(|| profile.username.clone()),
        api_key: global.api_key.clone().or_else(|| profile.api_key.clone()),
        api_key_env: if global.api_key.is_some() {
            None
        } else {
            profile.api_key_env.clone()
        },
        domain_prefix: profile.domain_prefix.clone(),
        data_dir: profile.data_dir.clone(),
        timeout: global.timeout.or(profile.timeout),
        window_days: profile.window_days,
        cache_ttl: profile.cache_ttl,
    };

    Ok(profile_to_service_config(
        &patched,
        &profile_name,
        &cfg.defaults,
    )?)
}
