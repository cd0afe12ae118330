//! Stats Command
//!
//! Totals for the whole tree, test packages included.
//!
//! Usage:
//!   goscope stats [dir] [--json]

use std::path::Path;

use crate::cli::CommandContext;
use crate::config::{ColorMode, Config};
use crate::report::Stats;
use crate::types::Result;

pub fn run(dir: &Path, json: bool, color: Option<ColorMode>) -> Result<()> {
    let ctx = CommandContext::load(dir, color)?;
    let directories = ctx.load_directories(Config::new().with_tests(true))?;
    let stats = Stats::collect(&directories, &ctx.module);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", stats.format(ctx.palette));
    }
    Ok(())
}
