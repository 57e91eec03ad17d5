//! Recursive tree builder
//!
//! Walks one directory level at a time in sorted order, reading and encoding
//! each regular file before moving on to the next sibling.

use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::collate::NameCollator;
use super::ignore::IgnoreSet;
use super::tree::{FileBlob, Node, Tree};
use crate::error::{Result, file_read_failed, read_dir_failed};

/// Build the tree for `directory`.
///
/// `prefix` is the `/` separated path of `directory` relative to the input
/// root, empty for the root itself. Entries whose prefixed name is in
/// `ignore` are skipped. Symlinks, sockets, devices and other special files
/// are skipped without error.
pub fn build_tree(directory: &Path, ignore: &IgnoreSet, prefix: &str) -> Result<Tree> {
    let builder = TreeBuilder {
        ignore,
        collator: NameCollator::new()?,
    };
    builder.build(directory, prefix)
}

struct TreeBuilder<'a> {
    ignore: &'a IgnoreSet,
    collator: NameCollator,
}

impl TreeBuilder<'_> {
    fn build(&self, directory: &Path, prefix: &str) -> Result<Tree> {
        let mut tree = Tree::new();

        for entry in self.sorted_entries(directory)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let relative_name = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}/{name}")
            };

            if self.ignore.contains(&relative_name) {
                debug!(entry = %relative_name, "skipping ignored entry");
                continue;
            }

            let file_type = entry.file_type();
            let node = if file_type.is_dir() {
                Node::Directory(self.build(entry.path(), &relative_name)?)
            } else if file_type.is_file() {
                let bytes = std::fs::read(entry.path())
                    .map_err(|e| file_read_failed(entry.path(), e))?;
                Node::File(FileBlob::encode(&bytes))
            } else {
                debug!(entry = %relative_name, "skipping entry that is neither a file nor a directory");
                continue;
            };

            if tree.insert(name, node).is_some() {
                warn!(
                    entry = %relative_name,
                    "entry name is not valid UTF-8 and collides with a sibling; keeping the later one"
                );
            }
        }

        Ok(tree)
    }

    /// Immediate entries of `directory`, in collation order.
    fn sorted_entries(&self, directory: &Path) -> Result<Vec<DirEntry>> {
        debug!(path = %directory.display(), "reading directory");

        let mut entries = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                let path = e.path().unwrap_or(directory).to_path_buf();
                read_dir_failed(&path, e)
            })?;

        entries.sort_by(|a, b| self.collator.compare_os(a.file_name(), b.file_name()));
        Ok(entries)
    }
}
