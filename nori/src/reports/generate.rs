//! Generate report data structures.

use std::path::PathBuf;
use std::time::Duration;

use nori_codegen::{EntryFailure, GenerateResult, PreviewResult};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub outcome: GenerationOutcome,
}

/// What the generate operation produced.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        result: GenerateResult,
        elapsed: Duration,
    },
    /// Dry-run preview; nothing touched disk.
    Preview(PreviewResult),
}

impl GenerateReport {
    pub fn written(result: GenerateResult, output_dir: PathBuf, elapsed: Duration) -> Self {
        Self {
            outcome: GenerationOutcome::Written {
                output_dir,
                result,
                elapsed,
            },
        }
    }

    pub fn preview(preview: PreviewResult) -> Self {
        Self {
            outcome: GenerationOutcome::Preview(preview),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            GenerationOutcome::Written {
                output_dir,
                result,
                elapsed,
            } => {
                render_failures(out, &result.failures);
                out.key_value(
                    "Generated",
                    &format!("{} files in {}", result.written.len(), output_dir.display()),
                );
                out.success(&format!(
                    "Completed generation in {}ms",
                    elapsed.as_millis()
                ));
            }
            GenerationOutcome::Preview(preview) => {
                render_failures(out, &preview.failures);
                for file in &preview.files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", preview.files.len()));
            }
        }
    }
}

fn render_failures(out: &mut dyn Output, failures: &[EntryFailure]) {
    for failure in failures {
        out.warning(&format!("skipped {}: {}", failure.file, failure.error));
    }
}
