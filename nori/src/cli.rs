//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use crate::ops;
use crate::reports::{Report, TerminalOutput};

#[derive(Parser)]
#[command(name = "nori")]
#[command(version)]
#[command(about = "Wrap a folder of SVG icons into typed React components")]
pub(crate) struct Cli {
    /// Directory to scan for SVG files
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// List discovered SVG files instead of generating components
    #[arg(short, long)]
    pub list: bool,

    /// Output directory for generated components
    #[arg(short, long, default_value = "./out")]
    pub output: PathBuf,

    /// Empty the output directory before generating
    #[arg(long)]
    pub clean: bool,

    /// Print rendered files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();

        if self.list {
            let report = ops::list(&self.root)?;
            report.render(&mut out);
            return Ok(());
        }

        let report = ops::generate(ops::GenerateOptions {
            root: &self.root,
            output_dir: &self.output,
            clean: self.clean,
            dry_run: self.dry_run,
        })?;
        report.render(&mut out);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["nori"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.output, PathBuf::from("./out"));
        assert!(!cli.list);
        assert!(!cli.clean);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_positional_root_and_flags() {
        let cli = Cli::parse_from(["nori", "icons", "-l", "-o", "dist"]);
        assert_eq!(cli.root, PathBuf::from("icons"));
        assert_eq!(cli.output, PathBuf::from("dist"));
        assert!(cli.list);
    }
}
