//! Bundle serialization and atomic write

use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use super::tree::Bundle;
use crate::error::{Result, file_write_failed};

/// Serialize a bundle as 2-space indented JSON.
pub fn to_json(bundle: &Bundle) -> Result<String> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Write `bundle` to `output_file`, replacing any existing file.
///
/// Content goes to a temporary file in the same directory first and is
/// renamed into place, so readers see either the previous file or the
/// complete new bundle. An existing output keeps its permissions; a symlink
/// at `output_file` is replaced by a regular file rather than written
/// through. The parent directory must already exist. Returns the number of
/// bytes written.
pub fn write_bundle(bundle: &Bundle, output_file: &Path) -> Result<usize> {
    let json = to_json(bundle)?;
    let existing_permissions = std::fs::metadata(output_file)
        .ok()
        .filter(std::fs::Metadata::is_file)
        .map(|meta| meta.permissions());
    let parent = output_file.parent().unwrap_or_else(|| Path::new("."));

    let mut builder = Builder::new();
    builder.prefix(".component-bundle").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut temp = builder
        .tempfile_in(parent)
        .map_err(|e| file_write_failed(output_file, e))?;
    temp.write_all(json.as_bytes())
        .and_then(|()| temp.flush())
        .map_err(|e| file_write_failed(output_file, e))?;
    if let Some(permissions) = existing_permissions {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| file_write_failed(output_file, e))?;
    }
    temp.persist(output_file)
        .map_err(|e| file_write_failed(output_file, e.error))?;

    debug!(
        path = %output_file.display(),
        root_key = bundle.root_key(),
        bytes = json.len(),
        "bundle written"
    );
    Ok(json.len())
}
