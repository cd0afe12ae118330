//! Structs Command
//!
//! DOT graph of the structs declared in one Go file.
//!
//! Usage:
//!   goscope structs <file>

use std::path::Path;

use crate::analyzer::PackageWalker;
use crate::config::Config;
use crate::report::format_structs;
use crate::types::Result;

pub fn run(file: &Path) -> Result<()> {
    let structs = PackageWalker::new(Config::new(), "")?.load_structs(file)?;
    print!("{}", format_structs(&structs));
    Ok(())
}
