//! Go Parser Module
//!
//! Tree-sitter based parsing of Go source into a typed syntax tree.
//!
//! ```rust,ignore
//! use goscope::analyzer::parser::GoParser;
//!
//! let mut parser = GoParser::new()?;
//! let file = parser.parse(Path::new("main.go"), content)?;
//! ```

pub mod go;
pub mod syntax;

pub use go::{GoParser, parse_source};
pub use syntax::{
    ChanDir, Decl, FieldGroup, FuncDecl, ImportSpec, ParamGroup, SourceContext, SourceFile,
    TypeExpr, TypeSpec,
};

use crate::types::{GoscopeError, Result};

/// Extract text content from a tree-sitter node.
/// Returns empty string if extraction fails (with debug logging).
#[inline]
pub fn get_node_text<'a>(node: tree_sitter::Node, content: &'a [u8]) -> &'a str {
    node.utf8_text(content).unwrap_or_else(|e| {
        tracing::debug!(
            "UTF-8 extraction failed at {}-{}:{}: {}",
            node_position(node),
            node.end_position().row + 1,
            node.end_position().column + 1,
            e
        );
        ""
    })
}

/// 1-based `line:column` of a node's start
pub fn node_position(node: tree_sitter::Node) -> String {
    let start = node.start_position();
    format!("{}:{}", start.row + 1, start.column + 1)
}

/// Create a tree-sitter parser for the given language.
pub fn create_ts_parser<L: Into<tree_sitter::Language>>(
    language: L,
    lang_name: &str,
) -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&language.into()).map_err(|e| {
        GoscopeError::Config(format!("Failed to set {} language: {}", lang_name, e))
    })?;
    Ok(parser)
}
