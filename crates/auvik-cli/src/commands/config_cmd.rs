//! Config subcommand handlers.

use std::collections::HashMap;

use dialoguer::{Input, Select};

use auvik_config::{self as config, Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Renderer;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("Auvik CLI — configuration wizard");
            eprintln!("  Config path: {}\n", config_path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Region
            let region: String = Input::new()
                .with_prompt("Auvik region (forms the API hostname)")
                .default("us1".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 3. Credentials
            let username: String = Input::new()
                .with_prompt("Username (email)")
                .interact_text()
                .map_err(prompt_err)?;

            let key = rpassword::prompt_password("API key: ").map_err(prompt_err)?;
            if username.is_empty() || key.is_empty() {
                return Err(CliError::Validation {
                    field: "credentials".into(),
                    reason: "username and API key cannot be empty".into(),
                });
            }

            // Offer keyring storage
            let store_choices = &[
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
            ];
            let store_selection = Select::new()
                .with_prompt("Where to store the API key?")
                .items(store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let api_key_field = if store_selection == 0 {
                let entry = keyring::Entry::new("auvik", &format!("{profile_name}/api-key"))
                    .map_err(|e| CliError::Validation {
                        field: "keyring".into(),
                        reason: format!("failed to access keyring: {e}"),
                    })?;
                entry.set_password(&key).map_err(|e| CliError::Validation {
                    field: "keyring".into(),
                    reason: format!("failed to store API key in keyring: {e}"),
                })?;
                eprintln!("  API key stored in system keyring");
                None // Don't write to config file
            } else {
                Some(key)
            };

            // 4. MSP domain prefix
            let domain_prefix: String = Input::new()
                .with_prompt("Your MSP's own domain prefix")
                .interact_text()
                .map_err(prompt_err)?;
            if domain_prefix.is_empty() {
                return Err(CliError::Validation {
                    field: "domain_prefix".into(),
                    reason: "domain prefix cannot be empty".into(),
                });
            }

            // 5. Build profile and config
            let profile = Profile {
                region,
                username: Some(username),
                api_key: api_key_field,
                domain_prefix: Some(domain_prefix),
                ..Profile::default()
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                defaults: config::Defaults::default(),
                profiles,
            };

            // 6. Write config
            config::save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: auvik tenants list");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let mut cfg = config::load_config_or_default();
            for profile in cfg.profiles.values_mut() {
                if profile.api_key.is_some() {
                    profile.api_key = Some("********".into());
                }
            }
            let out = Renderer::new(global);
            out.single(&cfg, |c| format!("{c:#?}"), |_| "config".into());
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
    }
}
