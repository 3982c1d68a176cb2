//! List operation: walk and display, generate nothing.

use std::path::Path;

use eyre::{Context, Result};
use nori_codegen::walk;

use crate::reports::ListReport;

/// Execute the list operation.
pub fn list(root: &Path) -> Result<ListReport> {
    let mut entries = walk(root).wrap_err("failed to scan source directory")?;
    entries.retain(|entry| entry.is_svg());

    Ok(ListReport::new(entries))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_list_resolves_svg_entries_only() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.svg"), "<svg/>").unwrap();
        fs::write(temp.path().join("notes.txt"), "text").unwrap();
        fs::create_dir(temp.path().join("brand")).unwrap();
        fs::write(temp.path().join("brand").join("logo.svg"), "<svg/>").unwrap();

        let report = list(temp.path()).unwrap();

        let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "brandLogo"]);
    }
}
