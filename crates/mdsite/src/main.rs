//! mdsite CLI - Markdown static site generator.
//!
//! `mdsite build [BASE_PATH]` copies the static directory into the output
//! and renders every markdown file under the content directory.

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::BuildArgs;
use output::Output;

/// mdsite - Markdown static site generator.
#[derive(Parser)]
#[command(name = "mdsite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site.
    Build(BuildArgs),
}

impl Cli {
    fn verbose(&self) -> bool {
        match &self.command {
            Commands::Build(args) => args.verbose,
        }
    }
}

/// Log to stderr. `--verbose` shows per-page progress, otherwise `RUST_LOG`
/// decides.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose());

    let output = Output::new();
    let result = match cli.command {
        Commands::Build(args) => args.execute(&output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.failure(&err);
            ExitCode::FAILURE
        }
    }
}
