//! Depth-first directory traversal.

use std::fs;
use std::path::Path;

use crate::{Error, ResolvedEntry, Result, WalkContext, naming::derive_identifier};

/// System artifact file names skipped during traversal.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Walk `root` depth-first and resolve every leaf found anywhere below.
///
/// An entry without a file extension is treated as a directory and
/// descended into; an entry with an extension is a leaf. Each directory
/// level derives its folder name and hands the combined prefix down via
/// a fresh [`WalkContext`]. No extension filtering happens here; every
/// leaf comes back, tagged with whether it sat below the root.
///
/// A directory that cannot be read aborts the whole walk.
pub fn walk(root: &Path) -> Result<Vec<ResolvedEntry>> {
    walk_dir(root, &WalkContext::root())
}

fn walk_dir(dir: &Path, ctx: &WalkContext) -> Result<Vec<ResolvedEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    // Deterministic output and report ordering on every platform.
    names.sort();

    let mut entries = Vec::new();
    for file_name in names {
        if IGNORED_FILES.contains(&file_name.as_str()) {
            continue;
        }

        let path = dir.join(&file_name);
        if path.extension().is_none() {
            // No extension: treated as a directory. An extensionless
            // regular file lands here too and fails the read, which is
            // the fatal traversal error the caller expects.
            let child_prefix = derive_identifier(&file_name, ctx);
            entries.extend(walk_dir(&path, &ctx.descend(child_prefix))?);
        } else {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push(ResolvedEntry {
                name: derive_identifier(&stem, ctx),
                source_path: dir.to_path_buf(),
                file_name,
                nested: ctx.depth > 0,
            });
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_flat_and_nested_entries() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.svg"), "<svg/>").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("b.svg"), "<svg/>").unwrap();

        let entries = walk(temp.path()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a");
        assert!(!entries[0].nested);
        assert_eq!(entries[1].name, "subB");
        assert!(entries[1].nested);
    }

    #[test]
    fn test_folder_context_flows_into_names() {
        let temp = TempDir::new().unwrap();
        let brand = temp.path().join("brand");
        fs::create_dir(&brand).unwrap();
        fs::write(brand.join("logo.svg"), "<svg/>").unwrap();

        let entries = walk(temp.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "brandLogo");
        assert_eq!(entries[0].file_name, "logo.svg");
        assert_eq!(entries[0].source_path, brand);
    }

    #[test]
    fn test_deep_prefix_accumulates() {
        let temp = TempDir::new().unwrap();
        let social = temp.path().join("brand").join("social");
        fs::create_dir_all(&social).unwrap();
        fs::write(social.join("x.svg"), "<svg/>").unwrap();

        let entries = walk(temp.path()).unwrap();

        assert_eq!(entries[0].name, "brandSocialX");
    }

    #[test]
    fn test_ignores_system_artifacts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".DS_Store"), "junk").unwrap();
        fs::write(temp.path().join("Thumbs.db"), "junk").unwrap();
        fs::write(temp.path().join("a.svg"), "<svg/>").unwrap();

        let entries = walk(temp.path()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "a.svg");
    }

    #[test]
    fn test_does_not_filter_by_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.svg"), "<svg/>").unwrap();
        fs::write(temp.path().join("notes.txt"), "text").unwrap();

        let entries = walk(temp.path()).unwrap();

        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_unreadable_entry_aborts_walk() {
        let temp = TempDir::new().unwrap();
        // An extensionless regular file is taken for a directory and the
        // failed read propagates.
        fs::write(temp.path().join("README"), "not a directory").unwrap();

        let err = walk(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ReadDir { .. }));
    }

    #[test]
    fn test_missing_root_aborts_walk() {
        let err = walk(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, Error::ReadDir { .. }));
    }
}
