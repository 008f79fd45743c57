//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Gradable - Place gradable adjectives on an intensity scale.
#[derive(Debug, Parser)]
#[command(name = "gradable")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.gradable/config.toml)
    #[arg(short, long, global = true, env = "GRADABLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (words only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve an equation table and rank its words
    Solve(SolveArgs),

    /// Build an equation table from a definitions file
    Extract(ExtractArgs),
}

/// Arguments for the solve command.
#[derive(Debug, Parser)]
pub struct SolveArgs {
    /// Property name (e.g. temperature)
    pub property: String,

    /// Equation table (default: <PROPERTY>_equations.csv)
    #[arg(short, long)]
    pub equations: Option<PathBuf>,

    /// Results file (default: <PROPERTY>_results.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use every word in the table, not only those connected to the anchor
    #[arg(long)]
    pub all: bool,

    /// Treat deduced relations as equations
    #[arg(long)]
    pub include_deduced: bool,

    /// Anchor word pinned to the boundary value
    #[arg(long)]
    pub anchor: Option<String>,

    /// Decimal digits kept in scores
    #[arg(long)]
    pub precision: Option<u32>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Property name (e.g. temperature)
    pub property: String,

    /// Definitions file (default: <PROPERTY>_definitions.csv)
    #[arg(short, long)]
    pub definitions: Option<PathBuf>,

    /// Equation table to write (default: <PROPERTY>_equations.csv)
    #[arg(short, long)]
    pub equations: Option<PathBuf>,

    /// Extra lexicon entries (TOML), merged over the built-in lists
    #[arg(short, long)]
    pub lexicon: Option<PathBuf>,

    /// Anchor word property mentions refer to
    #[arg(long)]
    pub anchor: Option<String>,

    /// Do not write deduced reciprocal relations
    #[arg(long)]
    pub no_deduced: bool,
}

/// Default file name for a property, e.g. `temperature_equations.csv`.
pub fn default_path(property: &str, kind: &str) -> PathBuf {
    PathBuf::from(format!("{}_{}.csv", property, kind))
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
