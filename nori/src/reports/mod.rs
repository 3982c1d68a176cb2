//! Report data structures.
//!
//! Ops build reports, reports render themselves to an [`Output`]
//! target. Data collection stays separate from presentation.

mod generate;
mod list;
mod output;

pub use generate::{GenerateReport, GenerationOutcome};
pub use list::ListReport;
pub use output::{Output, Report, TerminalOutput};
