//! Environment/runtime helpers
//!
//! Sanity checks run before the data file is written.

use std::path::Path;

use tracing::debug;

/// Ensure the directory that will hold `file` exists.
///
/// A bare file name (no parent component) needs nothing.
pub fn ensure_parent_dir(file: &Path) -> anyhow::Result<()> {
    let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }
    debug!(dir = %parent.display(), "creating data directory");
    std::fs::create_dir_all(parent)
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}
