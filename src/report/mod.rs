//! Report Formatters
//!
//! Consumers of the finished model. Every formatter is a pure function from
//! the directory map (or a struct list) to a `String`; printing is left to
//! the CLI layer.

pub mod dot;
pub mod entrypoints;
pub mod imports;
pub mod imports_table;
pub mod stats;
pub mod types;

pub use dot::{format_packages, format_structs};
pub use entrypoints::format_entrypoints;
pub use imports::format_import_graph;
pub use imports_table::format_imports_table;
pub use stats::Stats;
pub use types::{format_types, types_json};

use console::Style;

use crate::types::{DirectoryMap, Package};

/// Terminal styling that can be switched off entirely
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Paths inside the analyzed module
    pub fn module(&self, text: &str) -> String {
        self.paint(text, Style::new().green())
    }

    /// Standard-library paths
    pub fn std_lib(&self, text: &str) -> String {
        self.paint(text, Style::new().yellow())
    }

    /// Build constraint annotations
    pub fn constraint(&self, text: &str) -> String {
        self.paint(text, Style::new().red())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, Style::new().green().bold())
    }

    pub fn type_name(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan().bold())
    }

    pub fn method(&self, text: &str) -> String {
        self.paint(text, Style::new().magenta())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Style::new().dim())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    fn paint(&self, text: &str, s: Style) -> String {
        if !self.enabled {
            return text.to_string();
        }
        s.force_styling(true).apply_to(text).to_string()
    }
}

/// Whether `path` is the module root or below it
pub fn is_module_path(path: &str, module: &str) -> bool {
    path == module
        || path
            .strip_prefix(module)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// All packages, ordered by name and then module path
pub fn sorted_packages(directories: &DirectoryMap) -> Vec<&Package> {
    let mut packages: Vec<&Package> = directories
        .values()
        .flat_map(|d| d.packages.values())
        .collect();
    packages.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.module_path.cmp(&b.module_path))
    });
    packages
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::{Directory, DirectoryMap, File, Import, Package};
    use std::path::PathBuf;

    pub fn import(path: &str, std_lib: bool) -> Import {
        Import {
            name: String::new(),
            path: path.to_string(),
            std_lib,
        }
    }

    pub fn package(name: &str, module_path: &str, files: Vec<File>) -> Package {
        Package {
            name: name.to_string(),
            module_path: module_path.to_string(),
            files,
        }
    }

    /// Directory map with one package per entry, keyed under `/src`
    pub fn directories(packages: Vec<(&str, Package)>) -> DirectoryMap {
        let mut map = DirectoryMap::new();
        for (rel, pkg) in packages {
            let path = PathBuf::from("/src").join(rel);
            let entry = map
                .entry(path.clone())
                .or_insert_with(|| Directory::new(path, pkg.module_path.clone()));
            entry.packages.insert(pkg.name.clone(), pkg);
        }
        map
    }
}
