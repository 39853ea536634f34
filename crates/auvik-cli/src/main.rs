mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use auvik_core::Reporter;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

/// Log filter from the `-v` count; an explicit `RUST_LOG` wins, and
/// `--quiet` drops everything below errors.
fn init_tracing(global: &GlobalOpts) {
    let level = if global.quiet {
        "error"
    } else {
        match global.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // `config` and `completions` work without credentials; every other
    // command drives the API through a Reporter.
    match cli.command {
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;

            let mut spec = Cli::command();
            clap_complete::generate(args.shell, &mut spec, "auvik", &mut std::io::stdout());
            Ok(())
        }

        command => {
            let service = config::resolve_service_config(&cli.global)?;
            let reporter = Reporter::new(service)?;

            tracing::debug!(?command, "dispatching");
            commands::dispatch(command, &reporter, &cli.global).await
        }
    }
}
