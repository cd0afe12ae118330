//! Module manifest (`go.mod`) reader.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MODULE_MANIFEST;
use crate::types::{GoscopeError, Result, ResultExt};

static MODULE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*module\s+(?:"([^"]+)"|(\S+))\s*(?://.*)?$"#)
        .unwrap_or_else(|e| panic!("invalid module directive pattern: {}", e))
});

/// Declared module root path of the tree at `root`
pub fn read_module(root: &Path) -> Result<String> {
    let manifest = root.join(MODULE_MANIFEST);

    if !manifest.is_file() {
        return Err(GoscopeError::module(manifest, "module manifest not found"));
    }
    let content = std::fs::read_to_string(&manifest).with_path(&manifest)?;

    parse_module(&content).ok_or_else(|| GoscopeError::module(manifest, "no module directive"))
}

/// Module path from manifest text
pub fn parse_module(content: &str) -> Option<String> {
    let caps = MODULE_DIRECTIVE.captures(content)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}
