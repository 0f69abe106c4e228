//! Atomic file write for the rendered Makefile.
//!
//! All writes follow the same pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Atomically replace the target file
//!
//! Source and destination stay in the same directory, so the final rename is
//! atomic on POSIX filesystems. On crash, a temporary file named
//! `.{filename}.tmp` may remain next to the target.

use crate::error::{MoldError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MoldError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;

    write_and_sync(&temp_path, content)?;

    // Replace the target. On Windows rename fails when the destination
    // exists, so remove it first; elsewhere rename replaces atomically.
    #[cfg(windows)]
    {
        if path.exists() {
            fs::remove_file(path).map_err(|e| {
                MoldError::Io(format!(
                    "failed to remove existing file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MoldError::Io(format!(
            "failed to move temporary file into place at '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path next to the target (`.{filename}.tmp`).
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            MoldError::Io(format!("invalid output path '{}'", path.display()))
        })?;

    Ok(path.with_file_name(format!(".{}.tmp", file_name)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        MoldError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        MoldError::Io(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        MoldError::Io(format!(
            "failed to sync temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}
