//! Configuration Types
//!
//! Two kinds of configuration live here:
//! - [`Config`]: the extraction filter threaded into the walker. A pure value,
//!   built once per report by the CLI layer and never mutated afterwards.
//! - [`Settings`]: user preferences merged from defaults, config files and
//!   environment variables by the [`ConfigLoader`](super::ConfigLoader).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::constants::{report, scan};
use crate::types::{GoscopeError, Result};

// =============================================================================
// Extraction Filter
// =============================================================================

/// What to do with files that carry a build constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConstraintPolicy {
    /// Keep the file and surface its constraints
    #[default]
    Annotate,
    /// Drop the file from its package
    Skip,
}

/// Selects which packages and imports participate in a report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Packages whose module path contains any entry are left out
    pub exclude: BTreeSet<String>,
    /// Module paths (absolute or module-relative) selected verbatim
    pub select_exact: BTreeSet<String>,
    /// Substrings of module paths to select
    pub select: BTreeSet<String>,
    /// Drop standard-library imports at extraction time
    pub exclude_stdlib: bool,
    /// Keep `_test` packages
    pub include_tests: bool,
    pub build_constraints: BuildConstraintPolicy,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exclude(mut self, items: BTreeSet<String>) -> Self {
        self.exclude = items;
        self
    }

    pub fn with_select_exact(mut self, items: BTreeSet<String>) -> Self {
        self.select_exact = items;
        self
    }

    pub fn with_select(mut self, items: BTreeSet<String>) -> Self {
        self.select = items;
        self
    }

    pub fn with_exclude_stdlib(mut self, exclude: bool) -> Self {
        self.exclude_stdlib = exclude;
        self
    }

    pub fn with_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    pub fn with_build_constraints(mut self, policy: BuildConstraintPolicy) -> Self {
        self.build_constraints = policy;
        self
    }

    /// Split a comma-separated flag value into a set, ignoring empty items
    pub fn parse_set(value: &str) -> BTreeSet<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    }

    /// Whether a package with this module path passes the exclude/select filters
    pub fn selects(&self, module_path: &str, module_root: &str) -> bool {
        if self.exclude.iter().any(|e| module_path.contains(e.as_str())) {
            return false;
        }

        if self.select.is_empty() && self.select_exact.is_empty() {
            return true;
        }

        let relative = module_path
            .strip_prefix(module_root)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(module_path);

        let exact = self
            .select_exact
            .iter()
            .any(|s| s == module_path || s == relative);
        let partial = self.select.iter().any(|s| module_path.contains(s.as_str()));

        exact || partial
    }
}

// =============================================================================
// User Settings
// =============================================================================

/// Root settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terminal color handling
    pub color: ColorMode,

    /// Directory traversal settings
    pub scan: ScanSettings,

    /// Import graph settings
    pub graph: GraphSettings,

    /// Entrypoint listing settings
    pub entrypoints: EntrypointSettings,
}

impl Settings {
    /// Validate settings values.
    /// Returns `GoscopeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.scan.skip_dirs {
            glob::Pattern::new(pattern).map_err(|e| {
                GoscopeError::Config(format!("Invalid skip_dirs pattern '{}': {}", pattern, e))
            })?;
        }

        if self.entrypoints.file_name.trim().is_empty() {
            return Err(GoscopeError::Config(
                "entrypoints.file_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(&self) -> bool {
        match self {
            ColorMode::Auto => console::colors_enabled(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(format!(
                "Unknown color mode: {}. Valid values: auto, always, never",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Glob patterns matched against each directory name
    pub skip_dirs: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            skip_dirs: scan::DEFAULT_SKIP_DIRS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Package names left out of the import graph
    pub ignore_packages: Vec<String>,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            ignore_packages: report::DEFAULT_IGNORED_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntrypointSettings {
    pub file_name: String,
}

impl Default for EntrypointSettings {
    fn default() -> Self {
        Self {
            file_name: report::ENTRYPOINT_FILE.to_string(),
        }
    }
}
