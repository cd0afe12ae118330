//! Graphviz DOT output for structs.
//!
//! Each struct becomes an HTML-table node: a bold name row, a fields row and a
//! methods row. `structs` emits a flat graph for one file, `packages` groups
//! every package's structs into a cluster.

use std::fmt::Write;

use super::sorted_packages;
use crate::constants::report::TAB;
use crate::types::{DirectoryMap, Struct};

const GRAPH_ATTRIBUTES: &str = r##"    graph [
        labelloc = t
        fontname = "Helvetica,Arial,sans-serif"
        fontsize = 20
        layout = dot
        rankdir = LR
        newrank = true
    ]

    node [
        style=filled
        shape=rect
        pencolor="#00000044"
        fontname="Helvetica,Arial,sans-serif"
        shape=plaintext
    ]
"##;

/// DOT graph of the structs of a single file
pub fn format_structs(structs: &[Struct]) -> String {
    let mut out = String::from("digraph {\n");
    out.push_str(GRAPH_ATTRIBUTES);

    for s in structs {
        write_struct(&mut out, &s.name, s, 1);
    }

    out.push_str("}\n");
    out
}

/// DOT graph with one cluster per package
pub fn format_packages(directories: &DirectoryMap) -> String {
    let mut out = String::from("digraph {\n");
    out.push_str(GRAPH_ATTRIBUTES);

    for pkg in sorted_packages(directories) {
        let _ = writeln!(out, "\n{}subgraph cluster_{} {{", TAB, cluster_id(&pkg.module_path));
        let _ = writeln!(out, "{}label = \"{}\"", TAB.repeat(2), pkg.module_path);
        for s in pkg.structs() {
            let id = format!("{}.{}", pkg.module_path, s.name);
            write_struct(&mut out, &id, s, 2);
        }
        let _ = writeln!(out, "{}}}", TAB);
    }

    out.push_str("}\n");
    out
}

/// `/`, `.` and `-` are not valid in an unquoted DOT identifier
fn cluster_id(path: &str) -> String {
    path.replace(['/', '.', '-'], "_")
}

fn write_struct(out: &mut String, id: &str, s: &Struct, depth: usize) {
    let pad = TAB.repeat(depth);
    let _ = write!(
        out,
        r##"
{pad}"{id}" [
{pad}    fillcolor="#88ff0022"
{pad}    label=<<table border="0" cellborder="1" cellspacing="0" cellpadding="3">
{pad}        <tr><td port="push" sides="ltr"><b>{name}</b></td></tr>
{pad}        <tr><td port="switch" align="left">{fields}
{pad}        </td></tr>
{pad}        <tr><td port="switch" align="left">{methods}
{pad}        </td></tr>
{pad}    </table>>
{pad}    shape=plain
{pad}]
"##,
        pad = pad,
        id = id,
        name = escape(&s.name),
        fields = format_fields(s, depth + 3),
        methods = format_methods(s, depth + 3),
    );
}

fn format_fields(s: &Struct, depth: usize) -> String {
    let pad = TAB.repeat(depth);
    s.fields
        .iter()
        .map(|f| {
            if f.is_embedded() {
                format!("\n{}{}<br/>", pad, escape(&f.type_name))
            } else {
                format!("\n{}{} {}<br/>", pad, escape(&f.name), escape(&f.type_name))
            }
        })
        .collect()
}

fn format_methods(s: &Struct, depth: usize) -> String {
    let pad = TAB.repeat(depth);
    s.methods
        .iter()
        .map(|m| format!("\n{}{}<br/>", pad, escape(&m.signature)))
        .collect()
}

/// HTML-label escaping for `<` and `>` (channel arrows, placeholders)
fn escape(value: &str) -> String {
    value.replace('<', "&lt;").replace('>', "&gt;")
}
