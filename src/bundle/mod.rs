//! Directory bundling
//!
//! Turns a directory into a [`Bundle`]: a JSON object whose single root key
//! maps to a nested tree of base64 encoded files.
//!
//! - [`builder`]: recursive, sorted tree walk
//! - [`collate`]: locale-aware name ordering
//! - [`ignore`]: self-exclusion of the output file
//! - [`tree`]: bundle data model and its serialization
//! - [`writer`]: JSON encoding and atomic write

pub mod builder;
pub mod collate;
pub mod ignore;
pub mod tree;
pub mod writer;

use std::path::PathBuf;

use tracing::debug;

pub use builder::build_tree;
pub use ignore::IgnoreSet;
pub use tree::{Bundle, DEFAULT_ROOT_KEY};
pub use writer::write_bundle;

use crate::config::BundleConfig;
use crate::error::{BundlerError, Result, create_dir_failed};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub output_file: PathBuf,
    pub files: usize,
    pub bytes: usize,
}

/// Bundle `config.input_dir` into `config.output_file`.
///
/// The tree is built completely in memory before anything is written, so a
/// failure during traversal leaves any existing output untouched.
pub fn run(config: &BundleConfig) -> Result<BundleSummary> {
    let is_dir = std::fs::metadata(&config.input_dir)
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(BundlerError::InputDirInvalid {
            path: config.input_dir.display().to_string(),
        });
    }

    if let Some(parent) = config.output_file.parent() {
        std::fs::create_dir_all(parent).map_err(|e| create_dir_failed(parent, e))?;
    }

    let ignore = IgnoreSet::for_output(&config.input_dir, &config.output_file);
    debug!(ignored = ?ignore.iter().collect::<Vec<_>>(), "computed ignore set");

    let tree = build_tree(&config.input_dir, &ignore, "")?;
    let files = tree.file_count();
    debug!(entries = tree.len(), files, "tree built");

    let bundle = Bundle::new(config.root_key.as_str(), tree);
    let bytes = write_bundle(&bundle, &config.output_file)?;

    Ok(BundleSummary {
        output_file: config.output_file.clone(),
        files,
        bytes,
    })
}
