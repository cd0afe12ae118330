use std::path::Path;

use crate::types::DirectoryMap;

const MAIN_PACKAGE: &str = "main";

/// `<module path>  <relative file path>` for every entry file of a `main` package
pub fn format_entrypoints(directories: &DirectoryMap, root: &Path, file_name: &str) -> String {
    let mut lines: Vec<String> = directories
        .values()
        .filter_map(|d| d.packages.get(MAIN_PACKAGE))
        .flat_map(|pkg| {
            pkg.files
                .iter()
                .filter(move |f| f.file_name() == file_name)
                .map(move |f| format!("{}  {}", pkg.module_path, f.relative_path(root).display()))
        })
        .collect();
    lines.sort();

    lines.into_iter().map(|line| line + "\n").collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{directories, package};
    use crate::types::File;

    #[test]
    fn test_lists_main_files_of_main_packages() {
        let dirs = directories(vec![
            (
                "cmd/server",
                package(
                    "main",
                    "m/cmd/server",
                    vec![File::new("/src/cmd/server/main.go"), File::new("/src/cmd/server/flags.go")],
                ),
            ),
            (
                "cmd/cli",
                package("main", "m/cmd/cli", vec![File::new("/src/cmd/cli/main.go")]),
            ),
            (
                "lib",
                package("lib", "m/lib", vec![File::new("/src/lib/main.go")]),
            ),
        ]);

        let out = format_entrypoints(&dirs, Path::new("/src"), "main.go");
        assert_eq!(
            out,
            "m/cmd/cli  cmd/cli/main.go\nm/cmd/server  cmd/server/main.go\n"
        );
    }

    #[test]
    fn test_custom_entry_file_name() {
        let dirs = directories(vec![(
            "tool",
            package("main", "m/tool", vec![File::new("/src/tool/tool.go")]),
        )]);

        assert_eq!(format_entrypoints(&dirs, Path::new("/src"), "main.go"), "");
        assert_eq!(
            format_entrypoints(&dirs, Path::new("/src"), "tool.go"),
            "m/tool  tool/tool.go\n"
        );
    }
}
