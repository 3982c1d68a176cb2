//! Generated file writing.

use std::io;
use std::path::{Path, PathBuf};

/// Trait for types that represent one generated output file.
///
/// Every nori output is regenerated on each run, so writing always
/// overwrites whatever is at the target path.
pub trait GeneratedFile {
    /// File path relative to the output directory.
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the rendered content below `base`, creating parent
    /// directories as needed.
    fn write(&self, base: &Path) -> io::Result<()> {
        write_file(&self.path(base), &self.render())
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
