//! Settings Loader (Figment-based)
//!
//! Loads and merges settings from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (<config dir>/goscope/config.toml)
//! 3. Project config (<target>/.goscope.toml)
//! 4. Environment variables (GOSCOPE_* prefix, `__` separates sections)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use super::types::Settings;
use crate::types::{GoscopeError, Result};

/// Project-level settings file, looked up in the analyzed directory
pub const PROJECT_CONFIG_FILE: &str = ".goscope.toml";

/// Settings loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load(project_root: &Path) -> Result<Settings> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path(project_root);
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // e.g. GOSCOPE_SCAN__SKIP_DIRS -> scan.skip_dirs
        figment = figment.merge(Env::prefixed("GOSCOPE_").split("__").lowercase(true));

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Settings> {
        let settings: Settings = figment
            .extract()
            .map_err(|e| GoscopeError::Config(format!("Configuration error: {}", e)))?;

        settings.validate()?;

        Ok(settings)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "goscope").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path(project_root: &Path) {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path(project_root);
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Show current effective settings
    pub fn show_config(project_root: &Path, as_json: bool) -> Result<()> {
        let settings = Self::load(project_root)?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&settings).map_err(|e| GoscopeError::Config(e.to_string()))?
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let settings = ConfigLoader::load(temp_dir.path()).unwrap();

        assert_eq!(settings.color, ColorMode::Auto);
        assert_eq!(settings.scan.skip_dirs, vec!["vendor", ".git"]);
        assert_eq!(settings.entrypoints.file_name, "main.go");
    }

    #[test]
    fn test_load_project_file_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(
            &path,
            r#"
color = "never"

[scan]
skip_dirs = ["vendor", ".git", "testdata"]

[graph]
ignore_packages = ["mocks"]
"#,
        )
        .unwrap();

        let settings = ConfigLoader::load(temp_dir.path()).unwrap();
        assert_eq!(settings.color, ColorMode::Never);
        assert_eq!(settings.scan.skip_dirs.len(), 3);
        assert_eq!(settings.graph.ignore_packages, vec!["mocks"]);
        assert_eq!(settings.entrypoints.file_name, "main.go");
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[scan]\nskip_dirs = [\"[\"]\n").unwrap();

        let err = ConfigLoader::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, GoscopeError::Config(_)));
    }

    #[test]
    fn test_project_config_path() {
        assert_eq!(
            ConfigLoader::project_config_path(Path::new("/work/app")),
            PathBuf::from("/work/app/.goscope.toml")
        );
    }
}
