//! Bundle command implementation
//!
//! Resolves the configuration, runs the bundler and reports where the
//! bundle was written.

use console::Style;
use tracing::debug;

use crate::bundle;
use crate::cli::Cli;
use crate::config::BundleConfig;
use crate::error::Result;

/// Run the bundle command
pub fn run(cli: &Cli) -> Result<()> {
    let config = BundleConfig::from_cli(cli)?;
    debug!(
        input_dir = %config.input_dir.display(),
        output_file = %config.output_file.display(),
        root_key = %config.root_key,
        "resolved configuration"
    );

    let summary = bundle::run(&config)?;
    debug!(files = summary.files, bytes = summary.bytes, "bundle complete");

    let path_style = Style::new().cyan();
    println!(
        "Component bundle written to {}",
        path_style.apply_to(summary.output_file.display())
    );

    Ok(())
}
