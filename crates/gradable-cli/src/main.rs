//! Gradable CLI - Command-line interface for adjective intensity scaling.

use clap::Parser;
use gradable_cli::commands;
use gradable_cli::logging;
use gradable_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> gradable_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    logging::init(cli.verbose);

    // Load config file (or defaults)
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.output.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Solve(args) => {
            commands::execute_solve(args, &config, &formatter)?;
        }
        Command::Extract(args) => {
            commands::execute_extract(args, &config, &formatter)?;
        }
    }

    Ok(())
}
