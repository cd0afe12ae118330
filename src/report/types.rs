//! Colorized type listing.
//!
//! ```text
//! example.com/garage/cars (cars)
//!   cars/car.go [linux]
//!     Sedan
//!       other.Vehicle
//!       Doors int
//!       Open(int) bool
//! ```

use std::fmt::Write;
use std::path::Path;

use super::Palette;
use crate::types::{DirectoryMap, Package, Result};

const INDENT: &str = "  ";

/// Packages ordered by module path, then package name
fn listing_order(directories: &DirectoryMap) -> Vec<&Package> {
    let mut packages: Vec<&Package> = directories
        .values()
        .flat_map(|d| d.packages.values())
        .collect();
    packages.sort_by(|a, b| {
        a.module_path
            .cmp(&b.module_path)
            .then_with(|| a.name.cmp(&b.name))
    });
    packages
}

/// Tree listing of every package's files, structs, fields and methods
pub fn format_types(directories: &DirectoryMap, root: &Path, palette: Palette) -> String {
    let mut out = String::new();

    for pkg in listing_order(directories) {
        let _ = writeln!(
            out,
            "{} {}",
            palette.heading(&pkg.module_path),
            palette.dim(&format!("({})", pkg.name))
        );

        for file in &pkg.files {
            let rel = file.relative_path(root);
            let mut line = format!("{}{}", INDENT, rel.display());
            if file.is_constrained() {
                line.push(' ');
                line.push_str(&palette.constraint(&format!("[{}]", file.build_constraints.join("; "))));
            }
            let _ = writeln!(out, "{}", line);

            for s in &file.structs {
                let _ = writeln!(out, "{}{}", INDENT.repeat(2), palette.type_name(&s.name));
                for field in &s.fields {
                    if field.is_embedded() {
                        let _ = writeln!(out, "{}{}", INDENT.repeat(3), palette.dim(&field.type_name));
                    } else {
                        let _ = writeln!(
                            out,
                            "{}{} {}",
                            INDENT.repeat(3),
                            field.name,
                            palette.dim(&field.type_name)
                        );
                    }
                }
                for method in &s.methods {
                    let _ = writeln!(out, "{}{}", INDENT.repeat(3), palette.method(&method.signature));
                }
            }
        }
    }

    out
}

/// The filtered model as pretty JSON, in listing order
pub fn types_json(directories: &DirectoryMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(&listing_order(directories))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::{directories, package};
    use crate::types::{Field, File, Method, Struct};

    fn cars_tree() -> DirectoryMap {
        let mut sedan = Struct::new("Sedan");
        sedan.fields = vec![Field::embedded("other.Vehicle"), Field::named("Doors", "int")];
        sedan.methods = vec![Method::new("Open(int) bool")];

        let mut file = File::new("/src/cars/car.go");
        file.build_constraints = vec!["linux".to_string()];
        file.structs = vec![sedan];

        directories(vec![(
            "cars",
            package("cars", "example.com/garage/cars", vec![file]),
        )])
    }

    #[test]
    fn test_plain_listing() {
        let out = format_types(&cars_tree(), Path::new("/src"), Palette::plain());
        assert_eq!(
            out,
            "example.com/garage/cars (cars)\n  cars/car.go [linux]\n    Sedan\n      other.Vehicle\n      Doors int\n      Open(int) bool\n"
        );
    }

    #[test]
    fn test_colored_listing_marks_headings() {
        let out = format_types(&cars_tree(), Path::new("/src"), Palette::new(true));
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("example.com/garage/cars"));
        assert!(out.contains("cars/car.go \u{1b}[31m[linux]\u{1b}[0m\n"));
    }

    #[test]
    fn test_json_dump() {
        let json = types_json(&cars_tree()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "cars");
        assert_eq!(value[0]["module_path"], "example.com/garage/cars");
        let fields = &value[0]["files"][0]["structs"][0]["fields"];
        assert_eq!(fields[0]["name"], "");
        assert_eq!(fields[0]["type"], "other.Vehicle");
        assert_eq!(value[0]["files"][0]["build_constraints"][0], "linux");
    }
}
