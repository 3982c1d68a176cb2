use std::path::{Path, PathBuf};

/// A single leaf file discovered during traversal.
///
/// Produced by [`walk`](crate::walk), consumed once by the
/// [`Generator`](crate::Generator). Never persisted.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    /// Derived component identifier, e.g. `brandLogo`.
    ///
    /// Always matches `[A-Za-z][A-Za-z0-9]*`. Uniqueness within a batch
    /// is checked separately by
    /// [`check_collisions`](crate::check_collisions).
    pub name: String,

    /// Directory containing the file.
    pub source_path: PathBuf,

    /// Original file name, extension included.
    pub file_name: String,

    /// True when the file was found below the walk root.
    pub nested: bool,
}

impl ResolvedEntry {
    /// Full path to the source file.
    pub fn path(&self) -> PathBuf {
        self.source_path.join(&self.file_name)
    }

    /// Whether this entry is an SVG document.
    ///
    /// The walker resolves every leaf it finds; callers filter with this
    /// once, after the full walk.
    pub fn is_svg(&self) -> bool {
        Path::new(&self.file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}
