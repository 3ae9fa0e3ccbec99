use std::collections::HashMap;

use crate::{ast::ast::SyntaxNode, errors::errors::ParseError, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<SyntaxNode, ParseError>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Statements
    parser.stmt(TokenKind::Keyword, parse_declaration_stmt);
    parser.stmt(TokenKind::Identifier, parse_assignment_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
