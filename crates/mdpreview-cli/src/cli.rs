use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "mdpreview CLI - Summarize topologies and locate installed force-field files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count the molecules of a topology, grouped by canonical SMILES.
    Count(CountArgs),
    /// Find a force-field file in the directories of registered providers.
    Locate(LocateArgs),
    /// Manage the entry-point registry listing force-field directory providers.
    Registry(RegistryArgs),
}

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Path to a SMILES list file, one molecule per line (e.g., system.smi).
    #[arg(required = true, value_name = "PATH")]
    pub topology: PathBuf,
}

/// Arguments for the `locate` subcommand.
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// File name of the force field to find (e.g., openff-2.1.0.offxml).
    #[arg(required = true, value_name = "FILE")]
    pub force_field: String,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use this registry file instead of the configured one.
    #[arg(short, long, value_name = "PATH")]
    pub registry: Option<PathBuf>,

    /// Discovery group whose entry points are searched.
    #[arg(short, long, value_name = "GROUP")]
    pub group: Option<String>,

    /// Substring a provider directory must contain to be searched.
    #[arg(short, long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S locator.marker=openforcefields
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `registry` subcommand.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommands,
}

/// Available commands for registry management.
#[derive(Subcommand, Debug)]
pub enum RegistryCommands {
    /// Show the absolute path to the registry file.
    Path,
    /// Set a custom path for the registry file.
    SetPath {
        /// The registry file to use from now on.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the registry path to its default, OS-specific location.
    ResetPath,
    /// List registered entry points.
    List {
        /// Only show entry points of this discovery group.
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,
    },
    /// Register a provider and the directories it publishes.
    Add {
        /// Name of the entry point.
        #[arg(required = true)]
        name: String,
        /// Directories published by the provider.
        #[arg(required = true, num_args(1..))]
        directories: Vec<String>,
        /// Discovery group of the entry point.
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,
    },
}
