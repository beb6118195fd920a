//! Atomic write primitive
//!
//! Readers see either the old file or the new one, never a partial write.

use crate::errors::{io_error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write `content` to a sibling temp file, then rename it over the target
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    replace_via_temp(target_path, content, false)
}

/// Like [`atomic_write`], but the file is owner-only (0600 on unix) from
/// the moment the temp file is opened, before any content is written
pub fn atomic_write_private(target_path: &Path, content: &[u8]) -> Result<()> {
    replace_via_temp(target_path, content, true)
}

fn replace_via_temp(target_path: &Path, content: &[u8], private: bool) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_store_dir", e))?;
    }

    let temp_path = target_path.with_extension("tmp");
    write_temp(&temp_path, content, private).map_err(|e| io_error("write_store_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        fs::remove_file(&temp_path).ok();
        return Err(io_error("rename_store_temp", e));
    }

    Ok(())
}

fn write_temp(temp_path: &Path, content: &[u8], private: bool) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        if private {
            options.mode(0o600);
        }
    }

    let mut file = options.open(temp_path)?;
    // `mode` only applies on creation; a leftover temp file keeps its old bits
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if private {
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
    }
    #[cfg(not(unix))]
    let _ = private;

    file.write_all(content)
}
