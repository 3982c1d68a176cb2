//! Generate operation: walk, derive, emit.

use std::path::Path;
use std::time::Instant;

use eyre::{Context, Result};
use nori_codegen::{Generator, walk};
use nori_core::clear_or_create_dir;

use crate::reports::GenerateReport;

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory scanned for SVG files.
    pub root: &'a Path,
    /// Directory receiving generated components.
    pub output_dir: &'a Path,
    /// Whether to empty the output directory first.
    pub clean: bool,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Walks the source tree, filters for SVG leaves, and emits one
/// component per entry plus the shared `types.ts`.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let start = Instant::now();

    let mut entries = walk(opts.root).wrap_err("failed to scan source directory")?;
    entries.retain(|entry| entry.is_svg());

    let generator = Generator::new(&entries);

    if opts.dry_run {
        let preview = generator
            .preview()
            .wrap_err("failed to render components")?;
        return Ok(GenerateReport::preview(preview));
    }

    if opts.clean {
        clear_or_create_dir(opts.output_dir).wrap_err("failed to prepare output directory")?;
    }

    let result = generator
        .generate(opts.output_dir)
        .wrap_err("failed to generate components")?;

    Ok(GenerateReport::written(
        result,
        opts.output_dir.to_path_buf(),
        start.elapsed(),
    ))
}
