//! Standard-library import classification.
//!
//! A static table: an exact top-level package name, or a path under one of the
//! standard namespaces. Nothing is resolved against a Go installation.

/// Standard packages matched by exact path
const STD_PACKAGES: &[&str] = &[
    "archive", "bufio", "builtin", "bytes", "cmp", "compress", "container", "context", "crypto",
    "database", "debug", "embed", "encoding", "errors", "expvar", "flag", "fmt", "go", "hash",
    "html", "image", "index", "io", "iter", "log", "maps", "math", "mime", "net", "os", "path",
    "plugin", "reflect", "regexp", "runtime", "slices", "sort", "strconv", "strings", "structs",
    "sync", "syscall", "testing", "text", "time", "unicode", "unique", "unsafe", "weak",
];

/// Standard namespaces; any path below them is standard
const STD_PREFIXES: &[&str] = &[
    "archive/",
    "compress/",
    "container/",
    "crypto/",
    "database/",
    "debug/",
    "encoding/",
    "go/",
    "hash/",
    "html/",
    "image/",
    "index/",
    "io/",
    "log/",
    "math/",
    "mime/",
    "net/",
    "os/",
    "path/",
    "regexp/",
    "runtime/",
    "sync/",
    "testing/",
    "text/",
    "time/",
    "unicode/",
];

/// Whether an import path belongs to the Go standard library
pub fn is_std_lib(path: &str) -> bool {
    STD_PACKAGES.contains(&path) || STD_PREFIXES.iter().any(|p| path.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        for path in ["sync", "fmt", "context", "unsafe", "slices"] {
            assert!(is_std_lib(path), "{} should be standard", path);
        }
    }

    #[test]
    fn test_prefix_matches() {
        for path in ["net/http", "net/http/pprof", "go/ast", "encoding/json", "sync/atomic"] {
            assert!(is_std_lib(path), "{} should be standard", path);
        }
    }

    #[test]
    fn test_module_paths_are_not_standard() {
        for path in [
            "x/y/pkgA",
            "github.com/spf13/cobra",
            "golang.org/x/sync/errgroup",
            "syncx",
            "network/client",
        ] {
            assert!(!is_std_lib(path), "{} should not be standard", path);
        }
    }
}
