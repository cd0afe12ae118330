//! Imports Command
//!
//! DOT graph of package-to-package imports, standard library excluded.
//!
//! Usage:
//!   goscope imports [dir]

use std::path::Path;

use crate::cli::CommandContext;
use crate::config::{ColorMode, Config};
use crate::report::format_import_graph;
use crate::types::Result;

pub fn run(dir: &Path, color: Option<ColorMode>) -> Result<()> {
    let ctx = CommandContext::load(dir, color)?;
    let directories = ctx.load_directories(Config::new())?;

    print!(
        "{}",
        format_import_graph(&directories, &ctx.settings.graph.ignore_packages)
    );
    Ok(())
}
