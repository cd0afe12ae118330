//! Go Source Analyzer
//!
//! Structural extraction, leaf first:
//! - `parser`: tree-sitter-go lowering into a typed syntax tree
//! - `render`: canonical type strings
//! - `extract`: structs from type declarations, methods from functions
//! - `walker`: files grouped into packages, methods bound per package
//! - `scanner`: directory enumeration and the module manifest

pub mod extract;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod stdlib;
pub mod walker;

pub use scanner::{DirectoryLoader, read_module};
pub use stdlib::is_std_lib;
pub use walker::PackageWalker;
