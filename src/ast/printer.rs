//! Indented text rendering of a syntax tree.

use std::fmt::{self, Display, Write};

use super::ast::SyntaxNode;

const INDENT: &str = "  ";

/// Renders `node` one line per node, children two spaces deeper than their
/// parent. Each line is `Kind: value`, or just `Kind` for valueless nodes.
pub fn pretty_print(node: &SyntaxNode) -> String {
    let mut result = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut result, node, 0);
    result
}

fn write_node(out: &mut impl Write, node: &SyntaxNode, depth: usize) -> fmt::Result {
    out.write_str(&INDENT.repeat(depth))?;

    match node.value() {
        Some(value) => writeln!(out, "{}: {}", node.kind(), value)?,
        None => writeln!(out, "{}", node.kind())?,
    }

    for child in node.children() {
        write_node(out, child, depth + 1)?;
    }

    Ok(())
}

impl Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}
