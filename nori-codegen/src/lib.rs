//! SVG-to-component code generation for nori.
//!
//! This crate turns a directory tree of SVG icon files into TypeScript
//! React component modules plus a shared `types.ts` prop declaration.
//!
//! # Usage
//!
//! This crate is used internally by the `nori` CLI tool. You typically
//! don't need to use it directly.
//!
//! ```ignore
//! use nori_codegen::{Generator, walk};
//! use std::path::Path;
//!
//! let mut entries = walk(Path::new("icons"))?;
//! entries.retain(|entry| entry.is_svg());
//!
//! let generator = Generator::new(&entries);
//!
//! // Preview files without writing
//! let preview = generator.preview()?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("out"))?;
//! ```
//!
//! # Generated Output
//!
//! - `<lowercased-identifier>.tsx` - one component module per SVG
//! - `types.ts` - the `IconProps` shape shared by every component

mod context;
mod entry;
mod error;
mod generator;
mod naming;
mod svg;
mod walker;

pub mod files;

pub use context::WalkContext;
pub use entry::ResolvedEntry;
pub use error::{Error, Result};
pub use generator::{EntryFailure, GenerateResult, Generator, PreviewFile, PreviewResult};
pub use naming::{check_collisions, derive_identifier};
pub use svg::svg_to_jsx;
pub use walker::walk;
