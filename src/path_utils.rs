//! Cross-platform path utilities
//!
//! All helpers here are lexical: they never touch the file system and never
//! resolve symlinks, so `a/link/..` collapses to `a` even when `link` points
//! elsewhere.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` and normalize the result.
///
/// Absolute paths ignore `base`. The returned path has no `.` or `..`
/// components.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Remove `.` components and fold `..` into its parent.
///
/// A `..` directly under the root stays at the root, the same as the shell
/// does for `cd /..`. Leading `..` on a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    out.iter().collect()
}

/// Lexical path from `from` to `to`.
///
/// Both paths should already be absolute and normalized. Returns an empty
/// path when they are equal. When the paths live under different prefixes
/// (Windows drives), `to` is returned unchanged.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) =
        (from_parts.first(), to_parts.first())
    {
        if a != b {
            return to.to_path_buf();
        }
    }

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from_parts.len() {
        result.push("..");
    }
    for part in &to_parts[common..] {
        result.push(part.as_os_str());
    }
    result
}

/// Join the components of a relative path with `/` regardless of platform.
///
/// ```ignore
/// assert_eq!(to_forward_slashes(Path::new("dist/out.json")), "dist/out.json");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
