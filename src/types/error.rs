//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Classes
//!
//! - **External**: unreadable directories, unparsable Go files, a missing or
//!   malformed `go.mod`. These propagate to the caller with the offending path.
//! - **Internal**: a syntax node kind outside the closed Go grammar reaching the
//!   extractor. These are programming faults and abort via panic, they never
//!   appear as a `GoscopeError`.
//!
//! Soft skips (non-struct type declarations, methods whose receiver is never
//! found, packages rejected by a filter) are not errors at all.

use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum GoscopeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Module error in {path}: {message}")]
    Module { path: PathBuf, message: String },

    #[error("IO error at {path}: {source}")]
    PathIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GoscopeError>;

// =============================================================================
// Helper Functions
// =============================================================================

impl GoscopeError {
    /// Create a parse error for a source file
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a module manifest error
    pub fn module(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Module {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Path the failure relates to, when there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Parse { path, .. }
            | Self::Module { path, .. }
            | Self::PathIo { path, .. }
            | Self::InvalidPath { path } => Some(path),
            _ => None,
        }
    }
}

/// Context extension trait for attaching a path to IO failures
pub trait ResultExt<T> {
    /// Attach the path that was being read or listed
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|source| GoscopeError::PathIo {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = GoscopeError::parse("pkg/a.go", "syntax error at 3:1");
        assert_eq!(err.to_string(), "Parse error in pkg/a.go: syntax error at 3:1");
        assert_eq!(err.path(), Some(Path::new("pkg/a.go")));
    }

    #[test]
    fn test_with_path_wraps_io_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        let err = result.with_path("some/dir").unwrap_err();
        assert!(matches!(err, GoscopeError::PathIo { .. }));
        assert_eq!(err.path(), Some(Path::new("some/dir")));
        assert!(err.to_string().contains("some/dir"));
    }

    #[test]
    fn test_config_error_has_no_path() {
        let err = GoscopeError::Config("bad glob".to_string());
        assert!(err.path().is_none());
    }
}
