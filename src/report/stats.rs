//! Tree-wide totals.

use std::collections::BTreeSet;
use std::fmt::Write;

use serde::Serialize;

use super::{Palette, is_module_path};
use crate::analyzer::is_std_lib;
use crate::types::DirectoryMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Directories holding at least one package
    pub directories: usize,
    pub packages: usize,
    pub test_packages: usize,
    pub files: usize,
    pub constrained_files: usize,
    pub structs: usize,
    pub fields: usize,
    pub methods: usize,
    pub std_imports: usize,
    pub module_imports: usize,
    pub external_imports: usize,
}

impl Stats {
    pub fn collect(directories: &DirectoryMap, module: &str) -> Self {
        let mut stats = Stats::default();
        let mut imports = BTreeSet::new();

        for directory in directories.values().filter(|d| !d.is_empty()) {
            stats.directories += 1;

            for pkg in directory.packages.values() {
                stats.packages += 1;
                if pkg.is_test_package() {
                    stats.test_packages += 1;
                }

                for file in &pkg.files {
                    stats.files += 1;
                    if file.is_constrained() {
                        stats.constrained_files += 1;
                    }
                    for s in &file.structs {
                        stats.structs += 1;
                        stats.fields += s.fields.len();
                        stats.methods += s.methods.len();
                    }
                    imports.extend(file.imports.iter().map(|i| i.path.as_str()));
                }
            }
        }

        for path in imports {
            if is_std_lib(path) {
                stats.std_imports += 1;
            } else if is_module_path(path, module) {
                stats.module_imports += 1;
            } else {
                stats.external_imports += 1;
            }
        }

        stats
    }

    pub fn unique_imports(&self) -> usize {
        self.std_imports + self.module_imports + self.external_imports
    }

    pub fn format(&self, palette: Palette) -> String {
        let rows = [
            ("Directories", self.directories),
            ("Packages", self.packages),
            ("Test packages", self.test_packages),
            ("Files", self.files),
            ("Constrained files", self.constrained_files),
            ("Structs", self.structs),
            ("Fields", self.fields),
            ("Methods", self.methods),
            ("Imports", self.unique_imports()),
        ];

        let mut out = String::new();
        for (label, value) in rows {
            let _ = writeln!(out, "{} {}", palette.bold(&format!("{:<18}", label)), value);
        }
        let _ = writeln!(out, "  {} {}", palette.dim(&format!("{:<16}", "stdlib")), self.std_imports);
        let _ = writeln!(out, "  {} {}", palette.dim(&format!("{:<16}", "module")), self.module_imports);
        let _ = writeln!(
            out,
            "  {} {}",
            palette.dim(&format!("{:<16}", "external")),
            self.external_imports
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{directories, import, package};
    use crate::types::{Directory, Field, File, Method, Struct};
    use std::path::PathBuf;

    fn tree() -> DirectoryMap {
        let mut car = Struct::new("Car");
        car.fields = vec![Field::named("A", "int"), Field::named("B", "int")];
        car.methods = vec![Method::new("Drive()")];

        let mut a = File::new("/src/a/a.go");
        a.structs = vec![car];
        a.imports = vec![
            import("sync", true),
            import("m/b", false),
            import("github.com/x/y", false),
        ];
        let mut tagged = File::new("/src/a/a_linux.go");
        tagged.build_constraints = vec!["linux".to_string()];
        tagged.imports = vec![import("sync", true)];

        let mut dirs = directories(vec![
            ("a", package("a", "m/a", vec![a, tagged])),
            ("a", package("a_test", "m/a", vec![File::new("/src/a/a_test.go")])),
        ]);
        dirs.insert(PathBuf::from("/src/empty"), Directory::new("/src/empty", "m/empty"));
        dirs
    }

    #[test]
    fn test_collect_totals() {
        let stats = Stats::collect(&tree(), "m");
        assert_eq!(
            stats,
            Stats {
                directories: 1,
                packages: 2,
                test_packages: 1,
                files: 3,
                constrained_files: 1,
                structs: 1,
                fields: 2,
                methods: 1,
                std_imports: 1,
                module_imports: 1,
                external_imports: 1,
            }
        );
        assert_eq!(stats.unique_imports(), 3);
    }

    #[test]
    fn test_format_plain() {
        let out = Stats::collect(&tree(), "m").format(Palette::plain());
        assert!(out.starts_with("Directories        1\n"));
        assert!(out.contains("Test packages      1\n"));
        assert!(out.contains("  external         1\n"));
    }
}
