//! Type Extractor and Method Collector
//!
//! Both work on one declaration at a time and know nothing about files or
//! packages. Attaching collected methods to structs is the walker's job.

use tracing::trace;

use super::parser::{FuncDecl, ParamGroup, TypeExpr, TypeSpec};
use super::render::{render, render_list};
use crate::types::{Field, Method, Struct};

/// Extract a struct from a type declaration.
///
/// Returns `None` when the underlying type is not a struct literal
/// (interfaces, scalars, named types, instantiations). That is a normal skip.
pub fn extract_struct(spec: &TypeSpec) -> Option<Struct> {
    let TypeExpr::Struct(groups) = &spec.ty else {
        return None;
    };

    let mut s = Struct::new(&spec.name);
    for group in groups {
        let ty = render(&group.ty);
        if group.is_embedded() {
            s.fields.push(Field::embedded(ty));
            continue;
        }
        s.fields.extend(group.names.iter().map(|name| Field::named(name, &ty)));
    }

    trace!(name = %s.name, fields = s.fields.len(), "extracted struct");
    Some(s)
}

/// Collect a method declaration as `(receiver base name, method)`.
///
/// Free functions and receivers that do not resolve to a type name are skipped.
pub fn collect_method(func: &FuncDecl) -> Option<(String, Method)> {
    let receiver = receiver_base_name(func.receiver.as_ref()?)?;
    let signature = method_signature(&func.name, &func.params, &func.results);
    Some((receiver.to_string(), Method::new(signature)))
}

/// Base type name of a receiver: `T`, `*T`, `T[K]` and `*T[K]` all give `T`.
/// Type parameters are dropped.
pub fn receiver_base_name(receiver: &TypeExpr) -> Option<&str> {
    let ty = match receiver {
        TypeExpr::Pointer(inner) => inner.as_ref(),
        other => other,
    };
    let ty = match ty {
        TypeExpr::Generic(base) => base.as_ref(),
        other => other,
    };

    match ty {
        TypeExpr::Ident(name) => Some(name),
        _ => None,
    }
}

/// `name(p1, p2) r1, r2`, or `name(p1, p2)` when there are no results
pub fn method_signature(name: &str, params: &[ParamGroup], results: &[ParamGroup]) -> String {
    if results.is_empty() {
        format!("{}({})", name, render_list(params))
    } else {
        format!("{}({}) {}", name, render_list(params), render_list(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::parser::{Decl, FieldGroup, parse_source};
    use std::path::Path;

    fn decls(source: &str) -> Vec<Decl> {
        parse_source(Path::new("test.go"), source).unwrap().decls
    }

    fn structs(source: &str) -> Vec<Struct> {
        decls(source)
            .iter()
            .filter_map(|d| match d {
                Decl::Type(spec) => extract_struct(spec),
                _ => None,
            })
            .collect()
    }

    fn methods(source: &str) -> Vec<(String, Method)> {
        decls(source)
            .iter()
            .filter_map(|d| match d {
                Decl::Func(func) => collect_method(func),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_multiple_names_expand_in_order() {
        let spec = TypeSpec {
            name: "Pair".to_string(),
            ty: TypeExpr::Struct(vec![FieldGroup {
                names: vec!["One".to_string(), "Two".to_string(), "Three".to_string()],
                ty: TypeExpr::ident("string"),
            }]),
        };

        let s = extract_struct(&spec).unwrap();
        assert_eq!(
            s.fields,
            vec![
                Field::named("One", "string"),
                Field::named("Two", "string"),
                Field::named("Three", "string"),
            ]
        );
    }

    #[test]
    fn test_embedded_then_named_fields() {
        let found = structs("package cars\n\ntype Sedan struct {\n\tother.Vehicle\n\tDoors int\n}\n");
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].fields,
            vec![Field::embedded("other.Vehicle"), Field::named("Doors", "int")]
        );
        assert!(found[0].methods.is_empty());
    }

    #[test]
    fn test_non_struct_declarations_are_skipped() {
        let found = structs(
            "package cars\n\ntype Speed int\ntype Driver interface{ Drive() }\ntype Fleet []Car\ntype Car struct{}\n",
        );
        let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Car"]);
    }

    #[test]
    fn test_alias_to_struct_literal_is_extracted() {
        let found = structs("package cars\n\ntype Point = struct{ X, Y int }\n");
        assert_eq!(found[0].name, "Point");
        assert_eq!(found[0].fields.len(), 2);
    }

    #[test]
    fn test_field_renderings() {
        let found = structs(
            "package cars\n\ntype Camaro struct {\n\tEngine func(string, int) (int64, error)\n\tIn <-chan int32\n\tOut chan<- int32\n\tInner struct{ XXX int }\n\tArgs func(...string)\n\tTags map[string][]*Tag\n\tSizes [4]int\n}\n",
        );
        let types: Vec<&str> = found[0].fields.iter().map(|f| f.type_name.as_str()).collect();
        assert_eq!(
            types,
            vec![
                "func(string, int) (int64, error)",
                "<-chan int32",
                "chan<- int32",
                "struct{ XXX int }",
                "func(...string)",
                "map[string][]*Tag",
                "[]int",
            ]
        );
    }

    #[test]
    fn test_pointer_and_value_receivers_share_base_name() {
        let found = methods(
            "package cars\n\nfunc (m *Mechanic) Fix(c Car) error { return nil }\nfunc (m Mechanic) Name() string { return \"\" }\nfunc helper() {}\n",
        );

        assert_eq!(
            found,
            vec![
                ("Mechanic".to_string(), Method::new("Fix(Car) error")),
                ("Mechanic".to_string(), Method::new("Name() string")),
            ]
        );
    }

    #[test]
    fn test_generic_receivers_use_base_name() {
        let found = methods(
            "package list\n\nfunc (l *List[T]) Push(v T) {}\nfunc (l List[T]) Len() int { return 0 }\n",
        );
        assert_eq!(found[0], ("List".to_string(), Method::new("Push(T)")));
        assert_eq!(found[1], ("List".to_string(), Method::new("Len() int")));
    }

    #[test]
    fn test_zero_result_signature_has_no_trailing_space() {
        let sig = method_signature("Stop", &[], &[]);
        assert_eq!(sig, "Stop()");
    }

    #[test]
    fn test_multiple_results_are_comma_joined() {
        let found = methods(
            "package cars\n\nfunc (c *Car) Drive(ctx context.Context, miles ...int) (int, error) { return 0, nil }\n",
        );
        assert_eq!(
            found[0].1.signature,
            "Drive(context.Context, ...int) int, error"
        );
    }
}
