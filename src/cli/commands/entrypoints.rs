//! Entrypoints Command
//!
//! Program entry files of `main` packages.
//!
//! Usage:
//!   goscope entrypoints [dir]

use std::path::Path;

use crate::cli::CommandContext;
use crate::config::{ColorMode, Config};
use crate::report::format_entrypoints;
use crate::types::Result;

pub fn run(dir: &Path, color: Option<ColorMode>) -> Result<()> {
    let ctx = CommandContext::load(dir, color)?;
    let directories = ctx.load_directories(Config::new())?;

    print!(
        "{}",
        format_entrypoints(&directories, &ctx.root, &ctx.settings.entrypoints.file_name)
    );
    Ok(())
}
