//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Declarations, with and without initializers
//! - Assignments and bare references
//! - Flat expressions and parenthesized groups
//! - Graceful degradation on malformed statements
//! - The unclosed-parenthesis and nesting-limit errors

use super::parser::{parse, MAX_GROUP_DEPTH};
use crate::{
    ast::ast::{NodeKind, SyntaxNode},
    errors::errors::ParseError,
    lexer::lexer::tokenize,
};

fn parse_source(source: &str) -> Result<SyntaxNode, ParseError> {
    let scan = tokenize(source);
    parse(&scan.tokens)
}

fn leaf(kind: NodeKind, value: &str) -> SyntaxNode {
    SyntaxNode::leaf(kind, value)
}

fn node(kind: NodeKind, value: &str, children: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode::new(kind, Some(value.to_string()), children)
}

#[test]
fn test_parse_assignment() {
    let tree = parse_source("x = 5;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Assignment,
            "x",
            vec![SyntaxNode::expression(vec![leaf(NodeKind::Number, "5")])],
        )])
    );
}

#[test]
fn test_parse_declaration_without_initializer() {
    let tree = parse_source("int x;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Declaration,
            "int",
            vec![leaf(NodeKind::Identifier, "x")],
        )])
    );
}

#[test]
fn test_parse_declaration_with_initializer() {
    let tree = parse_source("int x = 1 + 2;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Declaration,
            "int",
            vec![
                leaf(NodeKind::Identifier, "x"),
                SyntaxNode::expression(vec![
                    leaf(NodeKind::Number, "1"),
                    leaf(NodeKind::Operator, "+"),
                    leaf(NodeKind::Number, "2"),
                ]),
            ],
        )])
    );
}

#[test]
fn test_expression_is_flat() {
    let tree = parse_source("r = a + 2 * b - 3.5 / c % d;").unwrap();
    let expression = &tree.children()[0].children()[0];

    assert_eq!(expression.kind(), NodeKind::Expression);
    assert_eq!(expression.children().len(), 11);
    assert!(expression.children().iter().all(|child| child.children().is_empty()));
    assert_eq!(expression.children()[3].value(), Some("*"));
}

#[test]
fn test_unclosed_parenthesis_at_end_of_input() {
    let error = parse_source("y = (1 + 2").unwrap_err();

    assert_eq!(error.expected(), ")");
    assert_eq!(error.found(), None);
    assert_eq!(error.get_position(), 10);
}

#[test]
fn test_unclosed_parenthesis_before_semicolon() {
    let error = parse_source("y = (1 + 2; z = 3;").unwrap_err();

    assert_eq!(
        error,
        ParseError::UnexpectedToken {
            expected: ")".to_string(),
            found: ";".to_string(),
            position: 10,
        }
    );
}

#[test]
fn test_parenthesized_expression_nests_once() {
    let tree = parse_source("y = (1 + 2)").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Assignment,
            "y",
            vec![SyntaxNode::expression(vec![SyntaxNode::expression(vec![
                leaf(NodeKind::Number, "1"),
                leaf(NodeKind::Operator, "+"),
                leaf(NodeKind::Number, "2"),
            ])])],
        )])
    );
}

#[test]
fn test_nested_parentheses() {
    let tree = parse_source("z = (a * (b + 1)) - c;").unwrap();
    let outer = &tree.children()[0].children()[0];

    assert_eq!(outer.children().len(), 3);
    let group = &outer.children()[0];
    assert_eq!(group.kind(), NodeKind::Expression);
    assert_eq!(group.children()[2].kind(), NodeKind::Expression);
    assert_eq!(group.children()[2].children().len(), 3);
    assert_eq!(outer.children()[1].value(), Some("-"));
}

#[test]
fn test_declaration_without_identifier_degrades() {
    let tree = parse_source("int = 5;").unwrap();

    // `=` and `5` are discarded at statement position.
    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(NodeKind::Declaration, "int", vec![])])
    );
}

#[test]
fn test_bare_reference_has_no_children() {
    let tree = parse_source("x; y").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![
            node(NodeKind::Assignment, "x", vec![]),
            node(NodeKind::Assignment, "y", vec![]),
        ])
    );
}

#[test]
fn test_stray_tokens_are_discarded() {
    let tree = parse_source(") ; , + 5 { } \"text\" == x = 1;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Assignment,
            "x",
            vec![SyntaxNode::expression(vec![leaf(NodeKind::Number, "1")])],
        )])
    );
}

#[test]
fn test_expression_stops_at_braces_without_consuming() {
    let tree = parse_source("while x { y = 2; }").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![
            node(
                NodeKind::Declaration,
                "while",
                vec![leaf(NodeKind::Identifier, "x")],
            ),
            node(
                NodeKind::Assignment,
                "y",
                vec![SyntaxNode::expression(vec![leaf(NodeKind::Number, "2")])],
            ),
        ])
    );
}

#[test]
fn test_expression_stops_at_other_operators() {
    let tree = parse_source("x = a < b;").unwrap();

    // `<` ends the expression and is dropped; `b` becomes a bare reference.
    assert_eq!(
        tree,
        SyntaxNode::program(vec![
            node(
                NodeKind::Assignment,
                "x",
                vec![SyntaxNode::expression(vec![leaf(NodeKind::Identifier, "a")])],
            ),
            node(NodeKind::Assignment, "b", vec![]),
        ])
    );
}

#[test]
fn test_commas_are_skipped_inside_expressions() {
    let tree = parse_source("x = a, b;").unwrap();
    let expression = &tree.children()[0].children()[0];

    assert_eq!(expression.children().len(), 2);
    assert_eq!(expression.children()[1].value(), Some("b"));
}

#[test]
fn test_empty_initializer() {
    let tree = parse_source("x = ;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Assignment,
            "x",
            vec![SyntaxNode::expression(vec![])],
        )])
    );
}

#[test]
fn test_parse_multiple_statements() {
    let tree = parse_source("int x = 10; float y; x = x + y; return x;").unwrap();
    let kinds = tree
        .children()
        .iter()
        .map(|stmt| (stmt.kind(), stmt.value()))
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            (NodeKind::Declaration, Some("int")),
            (NodeKind::Declaration, Some("float")),
            (NodeKind::Assignment, Some("x")),
            (NodeKind::Declaration, Some("return")),
        ]
    );
}

#[test]
fn test_parse_empty_program() {
    let tree = parse_source("").unwrap();

    assert_eq!(tree.kind(), NodeKind::Program);
    assert_eq!(tree.value(), None);
    assert!(tree.children().is_empty());
}

#[test]
fn test_depth_one_kinds() {
    let tree = parse_source("int a = (b); c = d e; ; ) f").unwrap();

    for stmt in tree.children() {
        assert!(matches!(
            stmt.kind(),
            NodeKind::Declaration | NodeKind::Assignment | NodeKind::Expression
        ));
    }
}

#[test]
fn test_parse_is_deterministic() {
    let source = "int x = (1 + y) * 2; z = x;";
    let first = parse_source(source).unwrap();
    let second = parse_source(source).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_parse_spanish_declaration() {
    let tree = parse_source("entero x = 1;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Declaration,
            "entero",
            vec![
                leaf(NodeKind::Identifier, "x"),
                SyntaxNode::expression(vec![leaf(NodeKind::Number, "1")]),
            ],
        )])
    );
}

#[test]
fn test_stray_close_paren_is_skipped_in_expression() {
    let tree = parse_source("x = 1 ) + 2;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Assignment,
            "x",
            vec![SyntaxNode::expression(vec![
                leaf(NodeKind::Number, "1"),
                leaf(NodeKind::Operator, "+"),
                leaf(NodeKind::Number, "2"),
            ])],
        )])
    );
}

#[test]
fn test_close_paren_still_ends_group() {
    let tree = parse_source("y = (1) ) 2;").unwrap();

    assert_eq!(
        tree,
        SyntaxNode::program(vec![node(
            NodeKind::Assignment,
            "y",
            vec![SyntaxNode::expression(vec![
                SyntaxNode::expression(vec![leaf(NodeKind::Number, "1")]),
                leaf(NodeKind::Number, "2"),
            ])],
        )])
    );
}

#[test]
fn test_nesting_up_to_limit_parses() {
    let source = format!(
        "x = {}1{};",
        "(".repeat(MAX_GROUP_DEPTH),
        ")".repeat(MAX_GROUP_DEPTH)
    );
    let tree = parse_source(&source).unwrap();

    let mut depth = 0;
    let mut expr = &tree.children()[0].children()[0];
    while let Some(inner) = expr
        .children()
        .iter()
        .find(|child| child.kind() == NodeKind::Expression)
    {
        depth += 1;
        expr = inner;
    }

    assert_eq!(depth, MAX_GROUP_DEPTH);
    assert_eq!(expr.children(), &[leaf(NodeKind::Number, "1")]);
}

#[test]
fn test_deep_balanced_nesting_is_an_error() {
    let source = format!("x = {}1{};", "(".repeat(20_000), ")".repeat(20_000));
    let error = parse_source(&source).unwrap_err();

    assert_eq!(
        error,
        ParseError::NestingTooDeep {
            limit: MAX_GROUP_DEPTH,
            position: 4 + MAX_GROUP_DEPTH,
        }
    );
    assert_eq!(error.expected(), ")");
}

#[test]
fn test_deep_unclosed_nesting_is_an_error() {
    let source = format!("x = {}", "(".repeat(100_000));
    let error = parse_source(&source).unwrap_err();

    assert!(matches!(error, ParseError::NestingTooDeep { .. }));
    assert_eq!(error.expected(), ")");
    assert_eq!(error.found(), Some("("));
}
