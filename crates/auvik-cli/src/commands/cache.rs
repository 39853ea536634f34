//! Report cache command handlers.

use auvik_core::Reporter;

use crate::cli::{CacheArgs, CacheCommand, GlobalOpts};
use crate::error::CliError;

use super::util;

pub fn handle(reporter: &Reporter, args: CacheArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CacheCommand::Clear { domain } => {
            let prompt = match domain {
                Some(ref domain) => format!("Clear the cached report for '{domain}'?"),
                None => "Clear all cached reports?".to_owned(),
            };
            if !util::confirm(&prompt, global.yes)? {
                return Ok(());
            }

            let cleared = reporter.clear_cache(domain.as_deref())?;
            if !global.quiet {
                if cleared {
                    eprintln!("Cache cleared");
                } else {
                    eprintln!("Nothing to clear");
                }
            }
            Ok(())
        }
    }
}
