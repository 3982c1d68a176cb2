//! List report data structures.

use nori_codegen::ResolvedEntry;

use super::output::{Output, Report};

/// Report data for the list operation.
#[derive(Debug)]
pub struct ListReport {
    /// Resolved SVG entries, in walk order.
    pub entries: Vec<ResolvedEntry>,
}

impl ListReport {
    pub fn new(entries: Vec<ResolvedEntry>) -> Self {
        Self { entries }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.preformatted("No SVG files found");
            return;
        }

        out.section(&format!("SVG files ({})", self.entries.len()));
        for (index, entry) in self.entries.iter().enumerate() {
            out.numbered_item(index + 1, &format!("{}.svg", entry.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::reports::output::test_support::RecordingOutput;

    fn entry(name: &str) -> ResolvedEntry {
        ResolvedEntry {
            name: name.to_string(),
            source_path: PathBuf::from("icons"),
            file_name: format!("{name}.svg"),
            nested: false,
        }
    }

    #[test]
    fn test_empty_report() {
        let mut out = RecordingOutput::default();
        ListReport::new(Vec::new()).render(&mut out);

        assert_eq!(out.lines, vec!["pre:No SVG files found"]);
    }

    #[test]
    fn test_entries_are_numbered_from_one() {
        let mut out = RecordingOutput::default();
        ListReport::new(vec![entry("a"), entry("brandLogo")]).render(&mut out);

        assert_eq!(out.lines[0], "section:SVG files (2)");
        assert_eq!(out.lines[1], "item:1:a.svg");
        assert_eq!(out.lines[2], "item:2:brandLogo.svg");
    }
}
