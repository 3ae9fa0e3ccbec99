use crate::{
    ast::ast::{NodeKind, SyntaxNode},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Collects a flat, left-to-right run of operands and arithmetic operators.
///
/// No precedence or associativity is applied: `1 + 2 * 3` yields five
/// sibling leaves. A parenthesized group becomes one nested `Expression`
/// child. `;`, `{` and `}` end the expression and are left for the caller,
/// as is any token that is neither operand, operator nor delimiter. `)` ends
/// the expression only inside a group; elsewhere it is skipped like `,`.
pub fn parse_expr(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    let mut operands = vec![];

    while let Some(token) = parser.current_token() {
        match token.kind {
            TokenKind::Identifier => {
                parser.advance();
                operands.push(SyntaxNode::leaf(NodeKind::Identifier, &token.value));
            }
            TokenKind::Number => {
                parser.advance();
                operands.push(SyntaxNode::leaf(NodeKind::Number, &token.value));
            }
            TokenKind::Operator => {
                parser.advance();
                operands.push(SyntaxNode::leaf(NodeKind::Operator, &token.value));
            }
            TokenKind::Delimiter => match token.value.as_str() {
                "(" => operands.push(parse_grouping_expr(parser)?),
                ")" if parser.group_depth() > 0 => break,
                ";" | "{" | "}" => break,
                _ => {
                    parser.advance();
                }
            },
            _ => break,
        }
    }

    Ok(SyntaxNode::expression(operands))
}

/// `( expression )`. A missing `)` is fatal, and so is nesting past
/// `MAX_GROUP_DEPTH`.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<SyntaxNode, ParseError> {
    parser.enter_group()?;
    parser.expect_delimiter("(")?;
    let expr = parse_expr(parser)?;
    parser.expect_delimiter(")")?;
    parser.exit_group();

    Ok(expr)
}
