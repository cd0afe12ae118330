//! tree-sitter-go lowering.
//!
//! Turns a tree-sitter `source_file` into a [`SourceFile`]. Malformed source
//! (ERROR/MISSING nodes, no package clause, statements at top level) is an
//! external failure and comes back as [`GoscopeError::Parse`]. A type node
//! outside the closed set below is a coverage gap in this module and panics.

use std::path::Path;

use tree_sitter::Node;

use super::syntax::{
    ChanDir, Decl, FieldGroup, FuncDecl, ImportSpec, ParamGroup, SourceContext, SourceFile,
    TypeExpr, TypeSpec,
};
use super::{create_ts_parser, get_node_text, node_position};
use crate::types::{GoscopeError, Result};

pub struct GoParser {
    parser: tree_sitter::Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let parser = create_ts_parser(tree_sitter_go::LANGUAGE, "Go")?;
        Ok(Self { parser })
    }

    /// Parse one Go source file into the typed tree
    pub fn parse(&mut self, path: &Path, source: &str) -> Result<SourceFile> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| GoscopeError::parse(path, "tree-sitter produced no tree"))?;

        let root = tree.root_node();
        if let Some(bad) = first_error(root) {
            let what = if bad.is_missing() {
                format!("missing {}", bad.kind())
            } else {
                "syntax error".to_string()
            };
            return Err(GoscopeError::parse(
                path,
                format!("{} at {}", what, node_position(bad)),
            ));
        }

        lower_file(&SourceContext::new(path, source), root)
    }
}

/// Parse with a fresh parser. Prefer [`GoParser`] when parsing many files.
pub fn parse_source(path: &Path, source: &str) -> Result<SourceFile> {
    GoParser::new()?.parse(path, source)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(bad) = first_error(child) {
            return Some(bad);
        }
    }
    None
}

// =============================================================================
// File Level
// =============================================================================

fn lower_file(ctx: &SourceContext, root: Node) -> Result<SourceFile> {
    let mut package = None;
    let mut header_comments = Vec::new();
    let mut imports = Vec::new();
    let mut decls = Vec::new();

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "comment" => {
                if package.is_none() {
                    header_comments.push(text(ctx, child).to_string());
                }
            }
            "package_clause" => package = Some(package_name(ctx, child)?),
            "import_declaration" => lower_imports(ctx, child, &mut imports),
            "type_declaration" => lower_type_decl(ctx, child, &mut decls),
            "function_declaration" | "method_declaration" => {
                decls.push(Decl::Func(lower_func(ctx, child)?))
            }
            "const_declaration" | "var_declaration" => decls.push(Decl::Value),
            other => {
                return Err(GoscopeError::parse(
                    ctx.path,
                    format!("unexpected top-level {} at {}", other, node_position(child)),
                ));
            }
        }
    }

    let package =
        package.ok_or_else(|| GoscopeError::parse(ctx.path, "missing package clause"))?;

    Ok(SourceFile {
        package,
        header_comments,
        imports,
        decls,
    })
}

fn package_name(ctx: &SourceContext, clause: Node) -> Result<String> {
    let mut cursor = clause.walk();
    let ident = clause
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_identifier");

    match ident {
        Some(node) => Ok(text(ctx, node).to_string()),
        None => Err(GoscopeError::parse(
            ctx.path,
            format!("package clause without name at {}", node_position(clause)),
        )),
    }
}

fn lower_imports(ctx: &SourceContext, decl: Node, out: &mut Vec<ImportSpec>) {
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => out.push(lower_import_spec(ctx, child)),
            "import_spec_list" => {
                let mut inner = child.walk();
                out.extend(
                    child
                        .named_children(&mut inner)
                        .filter(|n| n.kind() == "import_spec")
                        .map(|n| lower_import_spec(ctx, n)),
                );
            }
            _ => {}
        }
    }
}

fn lower_import_spec(ctx: &SourceContext, spec: Node) -> ImportSpec {
    let name = spec
        .child_by_field_name("name")
        .map(|n| text(ctx, n).to_string());
    let path = spec
        .child_by_field_name("path")
        .map(|n| text(ctx, n).trim_matches(|c| c == '"' || c == '`').to_string())
        .unwrap_or_default();

    ImportSpec { name, path }
}

// =============================================================================
// Declarations
// =============================================================================

fn lower_type_decl(ctx: &SourceContext, decl: Node, out: &mut Vec<Decl>) {
    let mut cursor = decl.walk();
    for spec in decl.named_children(&mut cursor) {
        if !matches!(spec.kind(), "type_spec" | "type_alias") {
            continue;
        }
        let name = field_text(ctx, spec, "name");
        let ty = lower_type(ctx, required_field(ctx, spec, "type"));
        out.push(Decl::Type(TypeSpec { name, ty }));
    }
}

fn lower_func(ctx: &SourceContext, decl: Node) -> Result<FuncDecl> {
    let receiver = match decl.child_by_field_name("receiver") {
        Some(list) => {
            let group = lower_params(ctx, list).into_iter().next().ok_or_else(|| {
                GoscopeError::parse(
                    ctx.path,
                    format!("method without receiver type at {}", node_position(list)),
                )
            })?;
            Some(group.ty)
        }
        None => None,
    };

    Ok(FuncDecl {
        name: field_text(ctx, decl, "name"),
        receiver,
        params: lower_params(ctx, required_field(ctx, decl, "parameters")),
        results: lower_results(ctx, decl.child_by_field_name("result")),
    })
}

fn lower_params(ctx: &SourceContext, list: Node) -> Vec<ParamGroup> {
    let mut groups = Vec::new();
    let mut cursor = list.walk();

    for param in list.named_children(&mut cursor) {
        match param.kind() {
            "parameter_declaration" => groups.push(ParamGroup {
                names: names(ctx, param),
                ty: lower_type(ctx, required_field(ctx, param, "type")),
            }),
            "variadic_parameter_declaration" => groups.push(ParamGroup {
                names: names(ctx, param),
                ty: TypeExpr::Variadic(Box::new(lower_type(
                    ctx,
                    required_field(ctx, param, "type"),
                ))),
            }),
            "comment" => {}
            other => unhandled(ctx, other, param),
        }
    }

    groups
}

/// A result is either a parenthesized list or a single bare type
fn lower_results(ctx: &SourceContext, result: Option<Node>) -> Vec<ParamGroup> {
    match result {
        None => Vec::new(),
        Some(node) if node.kind() == "parameter_list" => lower_params(ctx, node),
        Some(node) => vec![ParamGroup::unnamed(lower_type(ctx, node))],
    }
}

// =============================================================================
// Type Expressions
// =============================================================================

fn lower_type(ctx: &SourceContext, node: Node) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::Ident(text(ctx, node).to_string()),
        "qualified_type" => TypeExpr::Qualified {
            package: field_text(ctx, node, "package"),
            name: field_text(ctx, node, "name"),
        },
        "pointer_type" => TypeExpr::Pointer(Box::new(lower_type(ctx, inner(ctx, node)))),
        "array_type" | "slice_type" | "implicit_length_array_type" => TypeExpr::Array(Box::new(
            lower_type(ctx, required_field(ctx, node, "element")),
        )),
        "map_type" => TypeExpr::Map {
            key: Box::new(lower_type(ctx, required_field(ctx, node, "key"))),
            value: Box::new(lower_type(ctx, required_field(ctx, node, "value"))),
        },
        "channel_type" => TypeExpr::Chan {
            dir: chan_dir(node),
            elem: Box::new(lower_type(ctx, required_field(ctx, node, "value"))),
        },
        "function_type" => TypeExpr::Func {
            params: lower_params(ctx, required_field(ctx, node, "parameters")),
            results: lower_results(ctx, node.child_by_field_name("result")),
        },
        "interface_type" => TypeExpr::Interface,
        "struct_type" => TypeExpr::Struct(lower_fields(ctx, node)),
        "generic_type" => {
            TypeExpr::Generic(Box::new(lower_type(ctx, required_field(ctx, node, "type"))))
        }
        "parenthesized_type" => TypeExpr::Paren(Box::new(lower_type(ctx, inner(ctx, node)))),
        "negated_type" => TypeExpr::Approx(Box::new(lower_type(ctx, inner(ctx, node)))),
        other => unhandled(ctx, other, node),
    }
}

/// `chan T`, `chan<- T` (send) or `<-chan T` (receive)
fn chan_dir(node: Node) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node.children(&mut cursor).map(|c| c.kind()).collect();

    match tokens.as_slice() {
        ["<-", ..] => ChanDir::Recv,
        [_, "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

fn lower_fields(ctx: &SourceContext, struct_type: Node) -> Vec<FieldGroup> {
    let mut cursor = struct_type.walk();
    let Some(list) = struct_type
        .named_children(&mut cursor)
        .find(|n| n.kind() == "field_declaration_list")
    else {
        return Vec::new();
    };

    let mut groups = Vec::new();
    let mut list_cursor = list.walk();
    for decl in list.named_children(&mut list_cursor) {
        match decl.kind() {
            "field_declaration" => groups.push(lower_field(ctx, decl)),
            "comment" => {}
            other => unhandled(ctx, other, decl),
        }
    }
    groups
}

fn lower_field(ctx: &SourceContext, decl: Node) -> FieldGroup {
    let names = names(ctx, decl);
    let mut ty = lower_type(ctx, required_field(ctx, decl, "type"));

    // Embedded `*T` keeps its star as a bare token beside the type field
    if names.is_empty() {
        let mut cursor = decl.walk();
        if decl.children(&mut cursor).any(|c| c.kind() == "*") {
            ty = TypeExpr::Pointer(Box::new(ty));
        }
    }

    FieldGroup { names, ty }
}

// =============================================================================
// Node Helpers
// =============================================================================

fn text<'a>(ctx: &SourceContext<'a>, node: Node) -> &'a str {
    get_node_text(node, ctx.bytes())
}

fn names(ctx: &SourceContext, node: Node) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .map(|n| text(ctx, n).to_string())
        .collect()
}

fn field_text(ctx: &SourceContext, node: Node, field: &str) -> String {
    text(ctx, required_field(ctx, node, field)).to_string()
}

/// Fields the grammar marks mandatory; an error-free tree always has them
fn required_field<'t>(ctx: &SourceContext, node: Node<'t>, field: &str) -> Node<'t> {
    match node.child_by_field_name(field) {
        Some(child) => child,
        None => panic!(
            "{} without `{}` field at {}:{}",
            node.kind(),
            field,
            ctx.path.display(),
            node_position(node)
        ),
    }
}

/// Wrapped type of `*T`, `(T)` and `~T`, which have no field name
fn inner<'t>(ctx: &SourceContext, node: Node<'t>) -> Node<'t> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment");

    match child {
        Some(child) => child,
        None => panic!(
            "{} without inner type at {}:{}",
            node.kind(),
            ctx.path.display(),
            node_position(node)
        ),
    }
}

fn unhandled(ctx: &SourceContext, kind: &str, node: Node) -> ! {
    panic!(
        "unhandled syntax node `{}` at {}:{}",
        kind,
        ctx.path.display(),
        node_position(node)
    )
}
