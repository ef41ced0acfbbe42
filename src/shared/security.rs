//! File checks for the two places dep-audit touches the local disk:
//! reading the config file and writing the report.

use crate::shared::Result;
use anyhow::bail;
use std::fs;
use std::path::Path;

/// Largest config file dep-audit will read (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Checks that `path` is a regular, reasonably small config file
///
/// Uses `symlink_metadata()` so a symlink is seen as itself, never as
/// its target.
///
/// # Errors
/// The path is missing, a symbolic link, not a regular file, or larger
/// than [`MAX_CONFIG_FILE_SIZE`]
pub fn check_config_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Cannot inspect {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        bail!(
            "Security: {} is a symbolic link. Config files must be regular files.",
            path.display()
        );
    }
    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_CONFIG_FILE_SIZE
        );
    }
    Ok(())
}

/// Refuses to write a report through a symbolic link
///
/// A path that does not exist yet is fine; the report creates it.
pub fn check_report_destination(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => bail!(
            "Security: {} is a symbolic link. Reports are never written through symbolic links.",
            path.display()
        ),
        _ => Ok(()),
    }
}
