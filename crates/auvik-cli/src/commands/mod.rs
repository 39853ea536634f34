//! Command dispatch: bridges CLI args -> Reporter calls -> output formatting.

pub mod broadcasters;
pub mod cache;
pub mod config_cmd;
pub mod devices;
pub mod report;
pub mod tenants;
pub mod util;

use auvik_core::Reporter;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an account-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    reporter: &Reporter,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Report(args) => report::handle(reporter, args, global).await,
        Command::Broadcasters(args) => broadcasters::handle(reporter, args, global).await,
        Command::Tenants(args) => tenants::handle(reporter, args, global).await,
        Command::Devices(args) => devices::handle(reporter, args, global).await,
        Command::Cache(args) => cache::handle(reporter, args, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
