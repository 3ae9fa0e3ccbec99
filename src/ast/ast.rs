use std::fmt::Display;

use serde::Serialize;

/// Node kinds
///
/// `Program` is always the root; `Declaration`, `Assignment` and
/// `Expression` are statements; the rest are leaves of an expression.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize)]
pub enum NodeKind {
    Program,
    Declaration,
    Assignment,
    Expression,
    Operator,
    Identifier,
    Number,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Syntax tree node
///
/// Nodes are assembled bottom-up: children are finished before the parent
/// that owns them is created, and nothing is mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxNode {
    kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, value: Option<String>, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode {
            kind,
            value,
            children,
        }
    }

    /// A childless node carrying a lexeme.
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        SyntaxNode::new(kind, Some(value.into()), vec![])
    }

    pub fn program(statements: Vec<SyntaxNode>) -> Self {
        SyntaxNode::new(NodeKind::Program, None, statements)
    }

    pub fn expression(operands: Vec<SyntaxNode>) -> Self {
        SyntaxNode::new(NodeKind::Expression, None, operands)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }
}
