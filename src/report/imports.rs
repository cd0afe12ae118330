//! Package import graph in DOT.

use std::fmt::Write;

use super::sorted_packages;
use crate::analyzer::is_std_lib;
use crate::constants::report::TAB;
use crate::types::DirectoryMap;

/// One `"package" -> "import"` edge per unique non-standard import.
///
/// Packages whose name is in `ignore_packages` are left out; a package never
/// gets an edge to itself.
pub fn format_import_graph(directories: &DirectoryMap, ignore_packages: &[String]) -> String {
    let mut out = String::from("digraph {\n");
    let _ = writeln!(out, "{}rankdir=\"LR\"\n", TAB);

    for pkg in sorted_packages(directories) {
        if ignore_packages.iter().any(|name| *name == pkg.name) {
            continue;
        }

        for path in pkg.unique_import_paths() {
            if is_std_lib(path) || path == pkg.module_path {
                continue;
            }
            let _ = writeln!(out, "{}\"{}\" -> \"{}\"", TAB, pkg.module_path, path);
        }
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{directories, import, package};
    use crate::types::File;

    fn file(imports: &[(&str, bool)]) -> File {
        let mut f = File::new("x.go");
        f.imports = imports.iter().map(|(p, std)| import(p, *std)).collect();
        f
    }

    fn edges(out: &str) -> Vec<&str> {
        out.lines().filter(|l| l.contains("->")).map(str::trim).collect()
    }

    #[test]
    fn test_single_edge_between_nested_packages() {
        let dirs = directories(vec![
            ("a", package("a", "m/A", vec![file(&[("m/A/B", false), ("fmt", true)])])),
            ("a/b", package("b", "m/A/B", vec![file(&[])])),
        ]);

        let out = format_import_graph(&dirs, &[]);
        assert_eq!(edges(&out), vec!["\"m/A\" -> \"m/A/B\""]);
        assert!(out.starts_with("digraph {\n    rankdir=\"LR\"\n\n"));
    }

    #[test]
    fn test_no_self_edges_and_duplicates_collapse() {
        let dirs = directories(vec![(
            "a",
            package(
                "a",
                "m/A",
                vec![
                    file(&[("m/A", false), ("github.com/x/y", false)]),
                    file(&[("github.com/x/y", false)]),
                ],
            ),
        )]);

        let out = format_import_graph(&dirs, &[]);
        assert_eq!(edges(&out), vec!["\"m/A\" -> \"github.com/x/y\""]);
    }

    #[test]
    fn test_ignored_packages_are_skipped() {
        let dirs = directories(vec![
            ("mock", package("mock", "m/mock", vec![file(&[("m/A", false)])])),
            ("a", package("a", "m/A", vec![file(&[("m/B", false)])])),
        ]);

        let out = format_import_graph(&dirs, &["mock".to_string()]);
        assert_eq!(edges(&out), vec!["\"m/A\" -> \"m/B\""]);
    }
}
