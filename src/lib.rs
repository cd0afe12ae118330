//! goscope - Structural Analyzer for Go Source Trees
//!
//! Parses Go packages with tree-sitter and reconstructs a normalized model of
//! their structs, fields, methods, imports and build constraints, then renders
//! it as Graphviz graphs, type listings and import tables.
//!
//! ## Quick Start
//!
//! ```ignore
//! use goscope::{Config, DirectoryLoader, PackageWalker, read_module};
//!
//! let module = read_module(&root)?;
//! let mut directories = DirectoryLoader::new(&root, &module).enumerate()?;
//! PackageWalker::new(Config::new(), &module)?.walk_all(&mut directories)?;
//! print!("{}", goscope::report::format_import_graph(&directories, &[]));
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: tree-sitter lowering, type rendering, extraction and walking
//! - [`report`]: DOT graphs, tables and listings over the finished model
//! - [`config`]: extraction filters and user settings
//! - [`types`]: the model and error types

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod report;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{BuildConstraintPolicy, ColorMode, Config, ConfigLoader, Settings};

// Error Types
pub use types::error::{GoscopeError, Result, ResultExt};

// Model
pub use types::{Directory, DirectoryMap, Field, File, Import, Method, Package, Struct};

// =============================================================================
// Analyzer Re-exports
// =============================================================================

pub use analyzer::{DirectoryLoader, PackageWalker, is_std_lib, read_module};
