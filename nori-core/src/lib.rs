//! Core utilities for the nori icon component generator.
//!
//! This crate provides the string transforms used for identifier
//! derivation and the file-writing machinery shared across the nori
//! workspace.

mod dir;
mod file;
mod utils;

// File operations
pub use dir::clear_or_create_dir;
pub use file::GeneratedFile;
// String utilities
pub use utils::{
    capitalize_first_letter, number_to_word, remove_spaces, replace_special_characters,
    starts_with_number, to_camel_case, to_kebab_case,
};
