//! Identifier derivation for discovered files and folders.

use std::collections::HashMap;

use nori_core::{
    capitalize_first_letter, number_to_word, remove_spaces, replace_special_characters,
    starts_with_number, to_camel_case,
};

use crate::{Error, ResolvedEntry, Result, WalkContext};

/// Name used when a file or folder name sanitizes down to nothing.
const UNNAMED: &str = "unnamed";

/// Derive the component identifier for a file or folder name.
///
/// `raw` is the base name with the extension already stripped. The
/// result always matches `[A-Za-z][A-Za-z0-9]*`:
///
/// 1. `raw` is case-normalized and reduced to identifier-safe characters.
/// 2. An empty candidate falls back to the parent prefix, or to a fixed
///    sentinel at the walk root.
/// 3. A candidate starting with a digit has that one digit replaced by
///    its English word ("42" becomes "Four2"; later digits stay).
/// 4. The parent prefix is prepended unless it is already a
///    case-insensitive prefix of the candidate.
pub fn derive_identifier(raw: &str, ctx: &WalkContext) -> String {
    let candidate = remove_spaces(&replace_special_characters(&to_camel_case(raw)));

    if candidate.is_empty() {
        if ctx.prefix.is_empty() {
            return UNNAMED.to_string();
        }
        return ctx.prefix.clone();
    }

    let candidate = match leading_digit(&candidate) {
        // The leading digit is ASCII, so slicing one byte off is safe.
        Some(digit) => format!("{}{}", number_to_word(digit), &candidate[1..]),
        None => candidate,
    };

    if ctx.prefix.is_empty() || has_prefix_ignore_case(&candidate, &ctx.prefix) {
        candidate
    } else {
        format!("{}{}", ctx.prefix, capitalize_first_letter(&candidate))
    }
}

/// Fail when two entries derive the same identifier.
///
/// The deriver offers no global uniqueness guarantee: two sibling files
/// differing only in letter case, or in extension, collapse to one
/// identifier. The batch is checked once before anything is written.
/// Keys are lowercased because the output file name is the lowercased
/// identifier, so names differing only in case would still clobber each
/// other on disk.
pub fn check_collisions(entries: &[ResolvedEntry]) -> Result<()> {
    let mut seen: HashMap<String, &ResolvedEntry> = HashMap::new();
    for entry in entries {
        match seen.get(&entry.name.to_lowercase()) {
            Some(first) => {
                return Err(Error::DuplicateIdentifier {
                    name: entry.name.clone(),
                    first: first.path().display().to_string(),
                    second: entry.path().display().to_string(),
                });
            }
            None => {
                seen.insert(entry.name.to_lowercase(), entry);
            }
        }
    }
    Ok(())
}

fn leading_digit(s: &str) -> Option<u32> {
    if starts_with_number(s) {
        s.chars().next().and_then(|c| c.to_digit(10))
    } else {
        None
    }
}

fn has_prefix_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}
