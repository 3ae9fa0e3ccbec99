use tracing::{debug, trace};

use crate::{
    ast::ast::{NodeKind, SyntaxNode},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses one statement, or returns `None` when the token at the cursor
/// starts no statement. Such a token is consumed either way.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<SyntaxNode>, ParseError> {
    let Some(token) = parser.current_token() else {
        return Ok(None);
    };

    let handler = parser.get_stmt_lookup().get(&token.kind).copied();
    if let Some(handler) = handler {
        trace!(kind = %token.kind, value = %token.value, "parsing statement");
        return handler(parser).map(Some);
    }

    parser.advance();
    if !token.is_delimiter(";") {
        debug!(kind = %token.kind, value = %token.value, position = token.span.start, "discarding token at statement position");
    }

    Ok(None)
}

/// `keyword [identifier [= expression]]`
///
/// Stops at the first missing piece and keeps what it already has.
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let keyword = parser.expect(TokenKind::Keyword)?.value.clone();

    let mut children = vec![];

    if let Some(name) = parser.eat(TokenKind::Identifier) {
        children.push(SyntaxNode::leaf(NodeKind::Identifier, &name.value));

        if parser.eat(TokenKind::Assignment).is_some() {
            children.push(parse_expr(parser)?);
        }
    }

    Ok(SyntaxNode::new(NodeKind::Declaration, Some(keyword), children))
}

/// `identifier [= expression]`
///
/// Without `=` the result is a childless assignment: a bare reference.
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let target = parser.expect(TokenKind::Identifier)?.value.clone();

    let mut children = vec![];

    if parser.eat(TokenKind::Assignment).is_some() {
        children.push(parse_expr(parser)?);
    }

    Ok(SyntaxNode::new(NodeKind::Assignment, Some(target), children))
}
