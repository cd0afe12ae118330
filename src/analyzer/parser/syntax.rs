//! Typed Go syntax tree.
//!
//! A small, closed model of the parts of a Go source file the extractor cares
//! about. It is produced by lowering a tree-sitter tree (see [`super::go`]) and
//! consumed with exhaustive matches, so a new type kind is a compile error in
//! every consumer rather than a silent miss.

use std::path::Path;

/// Explicit context threaded through lowering for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct SourceContext<'a> {
    pub path: &'a Path,
    pub source: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(path: &'a Path, source: &'a str) -> Self {
        Self { path, source }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }
}

/// One parsed `.go` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package: String,
    /// Comment lines that precede the package clause, verbatim
    pub header_comments: Vec<String>,
    pub imports: Vec<ImportSpec>,
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Alias identifier, `.` or `_`
    pub name: Option<String>,
    /// Import path without quotes
    pub path: String,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// `type Name T` or `type Name = T`
    Type(TypeSpec),
    /// Function or method declaration
    Func(FuncDecl),
    /// `const` / `var` declarations carry no structural facts
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// Receiver type; `None` for free functions
    pub receiver: Option<TypeExpr>,
    pub params: Vec<ParamGroup>,
    pub results: Vec<ParamGroup>,
}

/// Type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T`
    Ident(String),
    /// `pkg.T`
    Qualified { package: String, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[N]T`, `[...]T` or `[]T`
    Array(Box<TypeExpr>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<TypeExpr>,
    },
    /// `func(P) R`; an empty `results` means no result list
    Func {
        params: Vec<ParamGroup>,
        results: Vec<ParamGroup>,
    },
    /// Any interface literal; members are not modeled
    Interface,
    /// Inline `struct{ ... }`
    Struct(Vec<FieldGroup>),
    /// `...T`, only legal as the last parameter
    Variadic(Box<TypeExpr>),
    /// `T[A, B]`; only the instantiated base is kept
    Generic(Box<TypeExpr>),
    /// `(T)`
    Paren(Box<TypeExpr>),
    /// `~T` inside a constraint
    Approx(Box<TypeExpr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// One line of a field list: `A, B int`, or an embedded `T` with no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl FieldGroup {
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// One parameter declaration: `a, b int`, `int` or `args ...string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamGroup {
    /// Names declared for the group; not part of any rendering
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl ParamGroup {
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }
}
