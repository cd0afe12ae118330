//! Global Constants
//!
//! Centralized constants for scanning, extraction and reporting.

/// Module manifest read at the analysis root
pub const MODULE_MANIFEST: &str = "go.mod";

/// Extension of Go source files
pub const GO_EXTENSION: &str = "go";

/// Package names ending with this suffix are external test packages
pub const TEST_PACKAGE_SUFFIX: &str = "_test";

/// Build constraint prefixes, current and legacy syntax
pub const BUILD_CONSTRAINT_PREFIXES: &[&str] = &["//go:build ", "// +build "];

/// Scanner constants
pub mod scan {
    /// Directory segments never descended into
    pub const DEFAULT_SKIP_DIRS: &[&str] = &["vendor", ".git"];
}

/// Rendering placeholders for syntax the model does not expand
pub mod placeholder {
    /// Generic instantiation such as `List[int]`
    pub const GENERIC: &str = "<generic>";

    /// Parenthesized type such as `(int)`
    pub const PAREN: &str = "<paren>";
}

/// Report constants
pub mod report {
    /// File name marking a program entrypoint
    pub const ENTRYPOINT_FILE: &str = "main.go";

    /// Package names left out of the import graph
    pub const DEFAULT_IGNORED_PACKAGES: &[&str] = &["fake", "mock", "test"];

    /// Indentation unit used in DOT output
    pub const TAB: &str = "    ";
}
