//! CLI Common Utilities
//!
//! Shared setup for report commands: resolve the target, read the module
//! manifest, load settings and build the model.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analyzer::{DirectoryLoader, PackageWalker, read_module};
use crate::config::{ColorMode, Config, ConfigLoader, Settings};
use crate::report::Palette;
use crate::types::{DirectoryMap, Result, ResultExt};

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Absolute analysis root
    pub root: PathBuf,
    /// Declared module root path from `go.mod`
    pub module: String,
    pub settings: Settings,
    pub palette: Palette,
}

impl CommandContext {
    /// Resolve `target`, read its module manifest and load settings.
    /// A `color` given on the command line overrides the configured mode.
    pub fn load(target: &Path, color: Option<ColorMode>) -> Result<Self> {
        let root = std::fs::canonicalize(target).with_path(target)?;
        let module = read_module(&root)?;
        let settings = ConfigLoader::load(&root)?;
        let palette = Palette::new(color.unwrap_or(settings.color).enabled());

        debug!(root = %root.display(), module = %module, "loaded command context");

        Ok(Self {
            root,
            module,
            settings,
            palette,
        })
    }

    /// Enumerate directories below the root and walk every package in them
    pub fn load_directories(&self, config: Config) -> Result<DirectoryMap> {
        let mut directories = DirectoryLoader::new(&self.root, &self.module)
            .with_skip_dirs(&self.settings.scan.skip_dirs)?
            .enumerate()?;

        PackageWalker::new(config, &self.module)?.walk_all(&mut directories)?;
        Ok(directories)
    }
}
