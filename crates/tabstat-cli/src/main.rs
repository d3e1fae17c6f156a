//! tabstat CLI - descriptive statistics and grouped rollups for tabular data.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            preset,
            plan,
            group_by,
            numeric,
            output,
            format,
            delimiter,
            max_groups,
        } => commands::analyze::run(commands::analyze::AnalyzeArgs {
            file,
            preset,
            plan,
            group_by,
            numeric,
            output,
            format,
            delimiter,
            max_groups,
            verbose: cli.verbose,
        }),

        Commands::Inspect {
            file,
            delimiter,
            json,
        } => commands::inspect::run(file, &delimiter, json),

        Commands::Batch { manifest, format } => {
            commands::batch::run(manifest, format, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
