//! component-bundle - directory to JSON bundler
//!
//! Packs every file under a directory into a single JSON document, keyed by
//! relative path, with file contents stored as base64.

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod path_utils;

use cli::Cli;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            // Usage errors exit with 1 like every other failure
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    if let Err(e) = commands::bundle::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
