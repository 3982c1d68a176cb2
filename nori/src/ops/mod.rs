//! Core operations.
//!
//! Business logic for the CLI, separated from argument parsing and
//! output rendering.

mod generate;
mod list;

pub use generate::{GenerateOptions, generate};
pub use list::list;
