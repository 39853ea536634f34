//! Clap derive structures for the `auvik` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// auvik -- tenant network reports from the command line
#[derive(Debug, Parser)]
#[command(
    name = "auvik",
    version,
    about = "Generate Auvik tenant network reports from the command line",
    long_about = "Aggregates device inventory, uptime, alerts, bandwidth, and health\n\
        statistics from the Auvik REST API into per-tenant reports.\n\n\
        Reports are cached on disk for an hour; use --refresh to force\n\
        regeneration.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'p', env = "AUVIK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "AUVIK_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Account username (an email address)
    #[arg(long, env = "AUVIK_USERNAME", global = true)]
    pub username: Option<String>,

    /// Auvik API key
    #[arg(long, env = "AUVIK_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "AUVIK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "AUVIK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate or display a tenant report
    #[command(alias = "r")]
    Report(ReportArgs),

    /// Rank a tenant's noisiest broadcast interfaces
    #[command(alias = "bc")]
    Broadcasters(BroadcastersArgs),

    /// Tenant directory operations
    #[command(alias = "t")]
    Tenants(TenantsArgs),

    /// Device inventory views
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Report cache maintenance
    Cache(CacheArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Report ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Tenant domain prefix
    pub domain: String,

    /// Skip the cache and regenerate from the API
    #[arg(long, short = 'r')]
    pub refresh: bool,

    /// Do not write the JSON report artifact
    #[arg(long)]
    pub no_artifact: bool,
}

// ── Broadcasters ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BroadcastersArgs {
    /// Tenant domain prefix
    pub domain: String,
}

// ── Tenants ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TenantsArgs {
    #[command(subcommand)]
    pub command: TenantsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TenantsCommand {
    /// List client tenants
    #[command(alias = "ls")]
    List,

    /// Rebuild the on-disk tenant directory from the API
    Sync,
}

// ── Devices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// Devices currently reported offline
    Offline {
        /// Tenant domain prefix
        domain: String,
    },

    /// Device counts per type
    #[command(alias = "inv")]
    Inventory {
        /// Tenant domain prefix
        domain: String,
    },

    /// Networks discovered on a tenant
    #[command(alias = "net")]
    Networks {
        /// Tenant domain prefix
        domain: String,
    },
}

// ── Cache ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

#[derive(Debug, Subcommand)]
pub enum CacheCommand {
    /// Drop one tenant's cached report, or all of them
    Clear {
        /// Tenant domain prefix (omit to clear everything)
        domain: Option<String>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive configuration wizard
    Init,

    /// Show the active configuration (credentials redacted)
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}
