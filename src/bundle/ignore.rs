//! Paths excluded from traversal
//!
//! The only path ever excluded is the bundle's own output file, when it is
//! written inside the directory being bundled.

use std::collections::HashSet;
use std::path::{Component, Path};

use crate::path_utils::{relative_path, to_forward_slashes};

/// Set of `/` separated paths, relative to the input directory, to skip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    paths: HashSet<String>,
}

impl IgnoreSet {
    /// Ignore set for an output file written to `output_file`.
    ///
    /// Both paths must be absolute and normalized. The output is ignored only
    /// when it lies strictly below `input_dir`; an output equal to the input
    /// directory yields an empty set.
    pub fn for_output(input_dir: &Path, output_file: &Path) -> Self {
        let mut set = Self::default();
        let relative = relative_path(input_dir, output_file);

        let escapes = matches!(relative.components().next(), Some(Component::ParentDir));
        if !relative.as_os_str().is_empty() && !escapes && !relative.is_absolute() {
            set.paths.insert(to_forward_slashes(&relative));
        }

        set
    }

    pub fn contains(&self, relative_name: &str) -> bool {
        self.paths.contains(relative_name)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}
