//! Type-Expression Renderer
//!
//! Renders a [`TypeExpr`] to its canonical string. The canonical string is
//! both what reports print and what tests compare against, so rendering is a
//! pure function of the expression's shape.
//!
//! | Expression            | Canonical form                    |
//! |-----------------------|-----------------------------------|
//! | `[N]T`, `[]T`         | `[]T`                             |
//! | `func(a, b int) error`| `func(int) (error)`               |
//! | `interface{ M() }`    | `interface{}`                     |
//! | `struct{ A, B int }`  | `struct{ A int, B int }`          |
//! | `List[int]`, `~int`   | `<generic>`                       |
//! | `(T)`                 | `<paren>`                         |

use crate::analyzer::parser::{ChanDir, FieldGroup, ParamGroup, TypeExpr};
use crate::constants::placeholder;

/// Render a type expression to its canonical string
pub fn render(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Ident(name) => name.clone(),
        TypeExpr::Qualified { package, name } => format!("{}.{}", package, name),
        TypeExpr::Pointer(inner) => format!("*{}", render(inner)),
        TypeExpr::Array(elem) => format!("[]{}", render(elem)),
        TypeExpr::Map { key, value } => format!("map[{}]{}", render(key), render(value)),
        TypeExpr::Chan { dir, elem } => match dir {
            ChanDir::Both => format!("chan {}", render(elem)),
            ChanDir::Send => format!("chan<- {}", render(elem)),
            ChanDir::Recv => format!("<-chan {}", render(elem)),
        },
        TypeExpr::Func { params, results } => {
            if results.is_empty() {
                format!("func({})", render_list(params))
            } else {
                format!("func({}) ({})", render_list(params), render_list(results))
            }
        }
        TypeExpr::Interface => "interface{}".to_string(),
        TypeExpr::Struct(fields) => render_struct(fields),
        TypeExpr::Variadic(elem) => format!("...{}", render(elem)),
        TypeExpr::Generic(_) | TypeExpr::Approx(_) => placeholder::GENERIC.to_string(),
        TypeExpr::Paren(_) => placeholder::PAREN.to_string(),
    }
}

/// Comma-joined types of a parameter or result list, one per group
pub fn render_list(groups: &[ParamGroup]) -> String {
    groups
        .iter()
        .map(|g| render(&g.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_struct(fields: &[FieldGroup]) -> String {
    let entries: Vec<String> = fields
        .iter()
        .flat_map(|group| {
            let ty = render(&group.ty);
            if group.is_embedded() {
                vec![ty]
            } else {
                group
                    .names
                    .iter()
                    .map(|name| format!("{} {}", name, ty))
                    .collect()
            }
        })
        .collect();

    if entries.is_empty() {
        "struct{}".to_string()
    } else {
        format!("struct{{ {} }}", entries.join(", "))
    }
}
