//! Imports Table Command
//!
//! How many packages import each path.
//!
//! Usage:
//!   goscope imports-table [dir] [-n] [-s <substr,...>]

use std::path::Path;

use crate::cli::CommandContext;
use crate::config::{ColorMode, Config};
use crate::report::format_imports_table;
use crate::types::Result;

pub fn run(dir: &Path, nostdlib: bool, select: &str, color: Option<ColorMode>) -> Result<()> {
    let ctx = CommandContext::load(dir, color)?;
    let config = Config::new()
        .with_exclude_stdlib(nostdlib)
        .with_select(Config::parse_set(select));
    let directories = ctx.load_directories(config)?;

    print!(
        "{}",
        format_imports_table(&directories, &ctx.module, ctx.palette)
    );
    Ok(())
}
