use std::path::PathBuf;

use thiserror::Error;

/// Result type for nori-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A directory could not be read during traversal. Fatal for the run.
    #[error("failed to read directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read. Recovered per entry.
    #[error("failed to read '{}'", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written. Recovered per entry for
    /// components, fatal for the shared type declaration.
    #[error("failed to write '{}'", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source document has no `<svg>` root element.
    #[error("no <svg> root element in '{}'", path.display())]
    MissingSvgRoot { path: PathBuf },

    /// Two source files derived the same component identifier.
    #[error("identifier '{name}' is derived from both '{first}' and '{second}'")]
    DuplicateIdentifier {
        name: String,
        first: String,
        second: String,
    },
}
