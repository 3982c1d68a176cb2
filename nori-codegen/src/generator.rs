//! Batch component generation.

use std::path::Path;

use nori_core::GeneratedFile;

use crate::{
    Error, ResolvedEntry, Result,
    files::{ComponentTsx, TypesTs},
    naming, svg,
};

/// A file rendered in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File name relative to the output directory.
    pub path: String,
    /// Rendered content.
    pub content: String,
}

/// One entry that failed on read, transform or write.
#[derive(Debug)]
pub struct EntryFailure {
    /// Full path of the offending source file.
    pub file: String,
    /// What went wrong.
    pub error: Error,
}

impl EntryFailure {
    fn new(entry: &ResolvedEntry, error: Error) -> Self {
        Self {
            file: entry.path().display().to_string(),
            error,
        }
    }
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// File names written, relative to the output directory.
    pub written: Vec<String>,
    /// Entries skipped after a failure; the batch kept going.
    pub failures: Vec<EntryFailure>,
}

/// Outcome of a preview run. Nothing touches disk.
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
    /// Entries that would be skipped.
    pub failures: Vec<EntryFailure>,
}

/// Drives component emission for a batch of resolved entries.
///
/// Entries are processed one at a time, in order. A failing entry is
/// recorded and never takes its siblings down with it; only the final
/// shared type declaration is allowed to fail the run.
pub struct Generator<'a> {
    entries: &'a [ResolvedEntry],
}

impl<'a> Generator<'a> {
    pub fn new(entries: &'a [ResolvedEntry]) -> Self {
        Self { entries }
    }

    /// Render every file without writing anything.
    pub fn preview(&self) -> Result<PreviewResult> {
        naming::check_collisions(self.entries)?;

        let mut result = PreviewResult::default();
        for entry in self.entries {
            match render_entry(entry) {
                Ok(file) => result.files.push(PreviewFile {
                    path: format!("{}.tsx", file.file_stem()),
                    content: file.render(),
                }),
                Err(error) => result.failures.push(EntryFailure::new(entry, error)),
            }
        }
        result.files.push(PreviewFile {
            path: "types.ts".to_string(),
            content: TypesTs.render(),
        });
        Ok(result)
    }

    /// Generate one component file per entry plus the shared `types.ts`
    /// into `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        naming::check_collisions(self.entries)?;

        let mut result = GenerateResult::default();
        for entry in self.entries {
            match emit_entry(entry, output_dir) {
                Ok(file_name) => result.written.push(file_name),
                Err(error) => result.failures.push(EntryFailure::new(entry, error)),
            }
        }

        // The shared type declaration is not guarded: every component
        // imports it, so a failure here is fatal.
        TypesTs.write(output_dir).map_err(|source| Error::WriteFile {
            path: TypesTs.path(output_dir),
            source,
        })?;
        result.written.push("types.ts".to_string());

        Ok(result)
    }
}

fn render_entry(entry: &ResolvedEntry) -> Result<ComponentTsx> {
    let path = entry.path();
    let raw = std::fs::read_to_string(&path).map_err(|source| Error::ReadFile {
        path: path.clone(),
        source,
    })?;
    let jsx = svg::svg_to_jsx(&raw, &entry.name, &path)?;
    Ok(ComponentTsx::new(entry.name.clone(), jsx))
}

fn emit_entry(entry: &ResolvedEntry, output_dir: &Path) -> Result<String> {
    let file = render_entry(entry)?;
    file.write(output_dir).map_err(|source| Error::WriteFile {
        path: file.path(output_dir),
        source,
    })?;
    Ok(format!("{}.tsx", file.file_stem()))
}
