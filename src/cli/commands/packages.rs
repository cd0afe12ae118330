//! Packages Command
//!
//! DOT graph with one cluster of structs per package. Files carrying a build
//! constraint are left out so tag-gated alternatives do not duplicate nodes.
//!
//! Usage:
//!   goscope packages [dir]

use std::path::Path;

use crate::cli::CommandContext;
use crate::config::{BuildConstraintPolicy, ColorMode, Config};
use crate::report::format_packages;
use crate::types::Result;

pub fn run(dir: &Path, color: Option<ColorMode>) -> Result<()> {
    let ctx = CommandContext::load(dir, color)?;
    let config = Config::new().with_build_constraints(BuildConstraintPolicy::Skip);
    let directories = ctx.load_directories(config)?;

    print!("{}", format_packages(&directories));
    Ok(())
}
