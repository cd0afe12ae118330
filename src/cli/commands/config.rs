//! Config Command
//!
//! Inspect goscope settings.
//!
//! Usage:
//!   goscope config show [dir] [--json]
//!   goscope config path [dir]

use std::path::Path;

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective settings
pub fn show(dir: &Path, json: bool) -> Result<()> {
    ConfigLoader::show_config(dir, json)
}

/// Show configuration file paths
pub fn path(dir: &Path) -> Result<()> {
    ConfigLoader::show_path(dir);
    Ok(())
}
