//! Import frequency table.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::{Palette, is_module_path};
use crate::analyzer::is_std_lib;
use crate::types::DirectoryMap;

/// `count path` lines, where count is the number of packages importing the path.
///
/// Sorted by count descending, then path ascending. Counts are right-aligned
/// to the widest count. Module paths and standard paths are colored apart.
pub fn format_imports_table(directories: &DirectoryMap, module: &str, palette: Palette) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for pkg in directories.values().flat_map(|d| d.packages.values()) {
        for path in pkg.unique_import_paths() {
            *counts.entry(path).or_default() += 1;
        }
    }

    let mut rows: Vec<(&str, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let width = rows
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for (path, count) in rows {
        let _ = writeln!(
            out,
            "{:>width$} {}",
            count,
            colorize(path, module, palette),
            width = width
        );
    }
    out
}

fn colorize(path: &str, module: &str, palette: Palette) -> String {
    if is_module_path(path, module) {
        palette.module(path)
    } else if is_std_lib(path) {
        palette.std_lib(path)
    } else {
        path.to_string()
    }
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

    #[test]
    fn test_counts_packages_not_files() {
        let both = [("sync", true), ("x/y/pkgA", false)];
        let dirs = directories(vec![
            ("one", package("one", "x/y/one", vec![file(&both), file(&both)])),
            ("two", package("two", "x/y/two", vec![file(&both)])),
        ]);

        let out = format_imports_table(&dirs, "x/y", Palette::plain());
        assert_eq!(out, "2 sync\n2 x/y/pkgA\n");
    }

    #[test]
    fn test_stdlib_and_module_colors_differ() {
        let both = [("sync", true), ("x/y/pkgA", false)];
        let dirs = directories(vec![
            ("one", package("one", "x/y/one", vec![file(&both)])),
            ("two", package("two", "x/y/two", vec![file(&both)])),
        ]);

        let out = format_imports_table(&dirs, "x/y", Palette::new(true));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "2 \u{1b}[33msync\u{1b}[0m");
        assert_eq!(lines[1], "2 \u{1b}[32mx/y/pkgA\u{1b}[0m");
    }

    #[test]
    fn test_sorted_by_count_then_path_and_aligned() {
        let mut packages = Vec::new();
        for i in 0..10 {
            let name = format!("p{}", i);
            packages.push((name.clone(), format!("m/{}", name)));
        }
        let mut entries = Vec::new();
        for (i, (name, module_path)) in packages.iter().enumerate() {
            let mut imports = vec![("github.com/a/common", false)];
            if i == 0 {
                imports.push(("github.com/z/rare", false));
                imports.push(("github.com/b/rare", false));
            }
            entries.push((name.as_str(), package(name, module_path, vec![file(&imports)])));
        }
        let dirs = directories(entries);

        let out = format_imports_table(&dirs, "m", Palette::plain());
        assert_eq!(
            out,
            "10 github.com/a/common\n 1 github.com/b/rare\n 1 github.com/z/rare\n"
        );
    }
}
