//! The shared `types.ts` prop declaration.

use std::path::{Path, PathBuf};

use nori_core::GeneratedFile;

/// The prop shape accepted by every generated component.
///
/// Written once per run, after all components, unconditionally
/// overwriting whatever is at the target path.
pub struct TypesTs;

impl GeneratedFile for TypesTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("types.ts")
    }

    fn render(&self) -> String {
        "export interface IconProps {
  className?: string
  size?: string | number
  absoluteStrokeWidth?: boolean
}
"
        .to_string()
    }
}
