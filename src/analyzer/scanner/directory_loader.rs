use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::scan::DEFAULT_SKIP_DIRS;
use crate::types::{Directory, DirectoryMap, GoscopeError, Result};

/// Recursive directory enumeration producing empty [`Directory`] shells.
///
/// Directories whose name matches a skip pattern are pruned with everything
/// below them. Symbolic links are never followed, so the walk cannot cycle.
pub struct DirectoryLoader {
    root: PathBuf,
    module: String,
    skip_dirs: Vec<glob::Pattern>,
}

impl DirectoryLoader {
    pub fn new<P: AsRef<Path>>(root: P, module: impl Into<String>) -> Self {
        let skip_dirs = DEFAULT_SKIP_DIRS
            .iter()
            .filter_map(|d| glob::Pattern::new(d).ok())
            .collect();
        Self {
            root: root.as_ref().to_path_buf(),
            module: module.into(),
            skip_dirs,
        }
    }

    /// Replace the skip patterns (matched against each directory name)
    pub fn with_skip_dirs(mut self, patterns: &[String]) -> Result<Self> {
        self.skip_dirs = patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    GoscopeError::Config(format!("Invalid skip_dirs pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Directory path → empty directory shell annotated with its module path
    pub fn enumerate(&self) -> Result<DirectoryMap> {
        if !self.root.is_dir() {
            return Err(GoscopeError::InvalidPath {
                path: self.root.clone(),
            });
        }

        let skip_dirs = self.skip_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                let name = entry.file_name().to_string_lossy();
                !(is_dir && entry.depth() > 0 && skip_dirs.iter().any(|p| p.matches(&name)))
            })
            .build();

        let mut directories = DirectoryMap::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_dir()) {
                continue;
            }

            let path = entry.into_path();
            let module_path = self.module_path(&path);
            directories.insert(path.clone(), Directory::new(path, module_path));
        }

        debug!(
            root = %self.root.display(),
            directories = directories.len(),
            "enumerated directories"
        );
        Ok(directories)
    }

    /// Module root joined with the root-relative directory suffix
    pub fn module_path(&self, dir: &Path) -> String {
        let suffix: Vec<String> = dir
            .strip_prefix(&self.root)
            .map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        if suffix.is_empty() {
            self.module.clone()
        } else {
            format!("{}/{}", self.module, suffix.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn module_paths(map: &DirectoryMap) -> Vec<&str> {
        map.values().map(|d| d.module_path.as_str()).collect()
    }

    #[test]
    fn test_enumerate_with_module_paths() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("cmd/garage")).unwrap();
        fs::create_dir_all(temp.path().join("internal")).unwrap();

        let map = DirectoryLoader::new(temp.path(), "example.com/garage")
            .enumerate()
            .unwrap();

        assert_eq!(
            module_paths(&map),
            vec![
                "example.com/garage",
                "example.com/garage/cmd",
                "example.com/garage/cmd/garage",
                "example.com/garage/internal",
            ]
        );
        assert!(map.values().all(Directory::is_empty));
    }

    #[test]
    fn test_skips_vendor_and_git() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("vendor/github.com/x")).unwrap();
        fs::create_dir_all(temp.path().join(".git/objects")).unwrap();
        fs::create_dir_all(temp.path().join("pkg/vendor")).unwrap();
        fs::create_dir_all(temp.path().join("pkg/vendored")).unwrap();

        let map = DirectoryLoader::new(temp.path(), "m").enumerate().unwrap();
        assert_eq!(module_paths(&map), vec!["m", "m/pkg", "m/pkg/vendored"]);
    }

    #[test]
    fn test_custom_skip_patterns() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("testdata")).unwrap();
        fs::create_dir_all(temp.path().join("api")).unwrap();

        let map = DirectoryLoader::new(temp.path(), "m")
            .with_skip_dirs(&["test*".to_string()])
            .unwrap()
            .enumerate()
            .unwrap();
        assert_eq!(module_paths(&map), vec!["m", "m/api"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_does_not_follow_symlinks() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("real/loop")).unwrap();

        let map = DirectoryLoader::new(temp.path(), "m").enumerate().unwrap();
        assert_eq!(module_paths(&map), vec!["m", "m/real"]);
    }

    #[test]
    fn test_missing_root_is_invalid_path() {
        let temp = TempDir::new().unwrap();
        let err = DirectoryLoader::new(temp.path().join("absent"), "m")
            .enumerate()
            .unwrap_err();
        assert!(matches!(err, GoscopeError::InvalidPath { .. }));
    }
}
