//! Types Command
//!
//! List every package's structs with fields and methods.
//!
//! Usage:
//!   goscope types [dir] [-e <substr,...>] [-E <path,...>] [-s <substr,...>] [--json]

use std::path::Path;

use crate::cli::CommandContext;
use crate::config::{ColorMode, Config};
use crate::report::{format_types, types_json};
use crate::types::Result;

/// Comma-separated package filters
#[derive(Debug, Clone, Default)]
pub struct TypeFilters {
    pub exclude: String,
    pub select_exact: String,
    pub select: String,
}

impl TypeFilters {
    fn to_config(&self) -> Config {
        Config::new()
            .with_exclude(Config::parse_set(&self.exclude))
            .with_select_exact(Config::parse_set(&self.select_exact))
            .with_select(Config::parse_set(&self.select))
    }
}

pub fn run(
    dir: &Path,
    filters: &TypeFilters,
    json: bool,
    color: Option<ColorMode>,
) -> Result<()> {
    let ctx = CommandContext::load(dir, color)?;
    let directories = ctx.load_directories(filters.to_config())?;

    if json {
        println!("{}", types_json(&directories)?);
    } else {
        print!("{}", format_types(&directories, &ctx.root, ctx.palette));
    }
    Ok(())
}
