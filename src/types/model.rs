//! Structural model of an analyzed Go source tree.
//!
//! Built once per run by the walker and read-only afterwards. Ownership is
//! strictly top-down: a [`DirectoryMap`] owns its [`Directory`] values, which own
//! their packages, which own their files, which own structs and imports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Directories keyed by filesystem path.
pub type DirectoryMap = BTreeMap<PathBuf, Directory>;

/// One filesystem directory and the Go packages declared directly inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Directory {
    pub path: PathBuf,
    /// Module root identifier with the directory's root-relative suffix appended
    pub module_path: String,
    /// A directory may hold several packages (`foo` and `foo_test`, tag-gated `main`s)
    pub packages: BTreeMap<String, Package>,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>, module_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            module_path: module_path.into(),
            packages: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    /// Graph/report identity; bare names collide across directories
    pub module_path: String,
    pub files: Vec<File>,
}

impl Package {
    pub fn structs(&self) -> impl Iterator<Item = &Struct> {
        self.files.iter().flat_map(|f| f.structs.iter())
    }

    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.files.iter().flat_map(|f| f.imports.iter())
    }

    /// Import paths used anywhere in the package, deduplicated and sorted
    pub fn unique_import_paths(&self) -> BTreeSet<&str> {
        self.imports().map(|i| i.path.as_str()).collect()
    }

    pub fn is_test_package(&self) -> bool {
        self.name.ends_with(crate::constants::TEST_PACKAGE_SUFFIX)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    pub path: PathBuf,
    /// Constraint expressions with the `//go:build ` prefix removed
    pub build_constraints: Vec<String>,
    pub structs: Vec<Struct>,
    pub imports: Vec<Import>,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn is_constrained(&self) -> bool {
        !self.build_constraints.is_empty()
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Path relative to `root`, falling back to the stored path
    pub fn relative_path(&self, root: &Path) -> PathBuf {
        self.path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| self.path.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Import {
    /// Explicit alias (`_`, `.` or an identifier); empty when absent
    pub name: String,
    pub path: String,
    pub std_lib: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Struct {
    pub name: String,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Empty for embedded fields
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Field {
    pub fn named(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    pub fn embedded(type_name: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            type_name: type_name.into(),
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Method {
    /// `name(paramTypes) resultTypes`
    pub signature: String,
}

impl Method {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
        }
    }
}
