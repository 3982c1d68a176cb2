//! Output directory preparation.

use std::io;
use std::path::Path;

/// Empty `path` if it exists, create it otherwise.
///
/// Idempotent: a missing directory is created (parents included), an
/// existing one has every file and subdirectory removed. The directory
/// itself is kept.
pub fn clear_or_create_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return std::fs::create_dir_all(path);
    }

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            std::fs::remove_dir_all(entry.path())?;
        } else {
            std::fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
