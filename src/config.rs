//! Run configuration
//!
//! Built once from the command line and passed explicitly to the bundler.

use std::path::{Path, PathBuf};

use crate::bundle::DEFAULT_ROOT_KEY;
use crate::cli::Cli;
use crate::error::Result;
use crate::path_utils::resolve;

/// File name used when no output path is given
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "components.bundle.json";

/// Resolved inputs for one bundling run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// Absolute, normalized directory to bundle
    pub input_dir: PathBuf,
    /// Absolute, normalized path of the JSON file to write
    pub output_file: PathBuf,
    /// Top-level key of the bundle
    pub root_key: String,
}

impl BundleConfig {
    /// Resolve raw arguments against `cwd`.
    ///
    /// The output defaults to [`DEFAULT_OUTPUT_FILE_NAME`] inside the input
    /// directory. An absent or empty root key falls back to
    /// [`DEFAULT_ROOT_KEY`].
    pub fn resolve(
        cwd: &Path,
        input_dir: &Path,
        output_file: Option<&Path>,
        root_key: Option<&str>,
    ) -> Self {
        let input_dir = resolve(cwd, input_dir);
        let output_file = match output_file {
            Some(path) => resolve(cwd, path),
            None => input_dir.join(DEFAULT_OUTPUT_FILE_NAME),
        };
        let root_key = root_key
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_ROOT_KEY)
            .to_string();

        Self {
            input_dir,
            output_file,
            root_key,
        }
    }

    /// Build the configuration from parsed arguments and the process's
    /// current directory.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::resolve(
            &cwd,
            &cli.input_dir,
            cli.output_file.as_deref(),
            cli.root_key.as_deref(),
        ))
    }
}
