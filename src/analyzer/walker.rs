//! File/Package Walker
//!
//! Parses every `.go` file directly inside a directory, groups the files by
//! their package clause and assembles one [`Package`] per name.
//!
//! Method binding runs in two passes per package:
//! 1. every file is scanned; structs land in their [`File`], methods are queued
//!    with the index of the file that declared them
//! 2. each queued method is attached to the struct of that name in its own
//!    file, else to the first such struct elsewhere in the package, else dropped
//!
//! Binding never crosses a package boundary.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::extract::{collect_method, extract_struct};
use super::parser::{Decl, GoParser, SourceFile};
use super::stdlib::is_std_lib;
use crate::config::{BuildConstraintPolicy, Config};
use crate::constants::{BUILD_CONSTRAINT_PREFIXES, GO_EXTENSION, TEST_PACKAGE_SUFFIX};
use crate::types::{DirectoryMap, File, Import, Method, Package, Result, ResultExt, Struct};

/// A method waiting for its receiver struct
struct PendingMethod {
    file: usize,
    receiver: String,
    method: Method,
}

pub struct PackageWalker {
    parser: GoParser,
    config: Config,
    module_root: String,
}

impl PackageWalker {
    pub fn new(config: Config, module_root: impl Into<String>) -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
            config,
            module_root: module_root.into(),
        })
    }

    /// Fill every directory's package map in place
    pub fn walk_all(&mut self, directories: &mut DirectoryMap) -> Result<()> {
        for (path, directory) in directories.iter_mut() {
            directory.packages = self.walk(path, &directory.module_path)?;
        }

        let packages: usize = directories.values().map(|d| d.packages.len()).sum();
        debug!(
            directories = directories.len(),
            packages, "walked source tree"
        );
        Ok(())
    }

    /// Packages declared directly inside `dir`, keyed by package name
    pub fn walk(&mut self, dir: &Path, module_path: &str) -> Result<BTreeMap<String, Package>> {
        let mut by_package: BTreeMap<String, Vec<(PathBuf, SourceFile)>> = BTreeMap::new();

        for path in go_files(dir)? {
            let source = fs::read_to_string(&path).with_path(&path)?;
            let parsed = self.parser.parse(&path, &source)?;
            by_package
                .entry(parsed.package.clone())
                .or_default()
                .push((path, parsed));
        }

        let mut packages = BTreeMap::new();
        for (name, files) in by_package {
            if name.ends_with(TEST_PACKAGE_SUFFIX) && !self.config.include_tests {
                continue;
            }
            if !self.config.selects(module_path, &self.module_root) {
                continue;
            }

            let package = self.assemble(&name, module_path, files);
            if package.files.is_empty() {
                continue;
            }

            trace!(package = %name, module_path, files = package.files.len(), "assembled package");
            packages.insert(name, package);
        }

        Ok(packages)
    }

    /// Structs of a single file with methods bound within that file
    pub fn load_structs(&mut self, path: &Path) -> Result<Vec<Struct>> {
        let source = fs::read_to_string(path).with_path(path)?;
        let parsed = self.parser.parse(path, &source)?;

        let mut pending = Vec::new();
        let file = self.scan_file(path.to_path_buf(), parsed, 0, &mut pending);
        let mut files = vec![file];
        bind_methods(&mut files, pending);

        Ok(files.pop().map(|f| f.structs).unwrap_or_default())
    }

    fn assemble(
        &self,
        name: &str,
        module_path: &str,
        sources: Vec<(PathBuf, SourceFile)>,
    ) -> Package {
        let mut files = Vec::with_capacity(sources.len());
        let mut pending = Vec::new();

        for (path, parsed) in sources {
            let constrained = !build_constraints(&parsed.header_comments).is_empty();
            if constrained && self.config.build_constraints == BuildConstraintPolicy::Skip {
                continue;
            }
            let index = files.len();
            files.push(self.scan_file(path, parsed, index, &mut pending));
        }

        bind_methods(&mut files, pending);

        Package {
            name: name.to_string(),
            module_path: module_path.to_string(),
            files,
        }
    }

    /// First pass over one file: imports, constraints, structs, queued methods
    fn scan_file(
        &self,
        path: PathBuf,
        parsed: SourceFile,
        index: usize,
        pending: &mut Vec<PendingMethod>,
    ) -> File {
        let mut file = File::new(path);
        file.build_constraints = build_constraints(&parsed.header_comments);

        for spec in parsed.imports {
            let std_lib = is_std_lib(&spec.path);
            if std_lib && self.config.exclude_stdlib {
                continue;
            }
            file.imports.push(Import {
                name: spec.name.unwrap_or_default(),
                path: spec.path,
                std_lib,
            });
        }

        for decl in &parsed.decls {
            match decl {
                Decl::Type(spec) => file.structs.extend(extract_struct(spec)),
                Decl::Func(func) => {
                    if let Some((receiver, method)) = collect_method(func) {
                        pending.push(PendingMethod {
                            file: index,
                            receiver,
                            method,
                        });
                    }
                }
                Decl::Value => {}
            }
        }

        file
    }
}

/// Second pass: own file first, then anywhere in the package
fn bind_methods(files: &mut [File], pending: Vec<PendingMethod>) {
    for PendingMethod {
        file,
        receiver,
        method,
    } in pending
    {
        let own = files
            .get(file)
            .and_then(|f| f.structs.iter().position(|s| s.name == receiver))
            .map(|pos| (file, pos));

        let target = own.or_else(|| {
            files.iter().enumerate().find_map(|(i, f)| {
                f.structs
                    .iter()
                    .position(|s| s.name == receiver)
                    .map(|pos| (i, pos))
            })
        });

        if let Some((i, pos)) = target {
            files[i].structs[pos].methods.push(method);
        }
    }
}

/// Build constraint expressions from header comments, prefix removed
pub fn build_constraints(header_comments: &[String]) -> Vec<String> {
    header_comments
        .iter()
        .filter_map(|line| {
            BUILD_CONSTRAINT_PREFIXES
                .iter()
                .find_map(|prefix| line.strip_prefix(prefix))
                .map(|rest| rest.trim().to_string())
        })
        .filter(|expr| !expr.is_empty())
        .collect()
}

/// `.go` files directly inside `dir`, sorted
fn go_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_path(dir)? {
        let entry = entry.with_path(dir)?;
        // symlinks are never followed
        if !entry.file_type().with_path(entry.path())?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == GO_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
