//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser owns a single forward cursor over a borrowed token slice and
//! dispatches each statement through a lookup table keyed by token kind.

use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::ast::SyntaxNode,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// Deepest parenthesized group the parser descends into.
pub const MAX_GROUP_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The tokens to parse
    tokens: &'a [Token],
    /// Index of the next unread token; never moves backwards
    pos: usize,
    /// Number of parenthesized groups currently open
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            stmt_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Advances to the next token and returns the one stepped over.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token only if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.current_token_kind() == Some(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an Error
    /// naming the kind that was expected.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, ParseError> {
        match self.current_token() {
            Some(token) if token.kind == expected_kind => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(expected_kind.to_string())),
        }
    }

    /// Expects a delimiter token with exactly this lexeme.
    pub fn expect_delimiter(&mut self, delimiter: &str) -> Result<&'a Token, ParseError> {
        match self.current_token() {
            Some(token) if token.is_delimiter(delimiter) => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(delimiter.to_string())),
        }
    }

    fn unexpected(&self, expected: String) -> ParseError {
        match self.current_token() {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.value.clone(),
                position: token.span.start,
            },
            None => ParseError::UnexpectedEof {
                expected,
                position: self.get_position(),
            },
        }
    }

    /// Opens a parenthesized group, failing once `MAX_GROUP_DEPTH` groups
    /// are already open.
    pub fn enter_group(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_GROUP_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_GROUP_DEPTH,
                position: self.get_position(),
            });
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Number of parenthesized groups currently open.
    pub fn group_depth(&self) -> usize {
        self.depth
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token kind.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the source position (char offset) of the cursor. Past the last
    /// token this is the end of that token.
    pub fn get_position(&self) -> usize {
        match self.current_token() {
            Some(token) => token.span.start,
            None => self.tokens.last().map_or(0, |token| token.span.end),
        }
    }
}

/// Parses a token sequence into a syntax tree rooted at `Program`.
///
/// Statements are parsed until the tokens run out. Malformed statements
/// degrade into partial nodes or are skipped; the only errors come from
/// parenthesized groups: a missing `)` or nesting past `MAX_GROUP_DEPTH`.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        if let Some(stmt) = parse_stmt(&mut parser)? {
            body.push(stmt);
        }
    }

    trace!(statements = body.len(), "parsed program");

    Ok(SyntaxNode::program(body))
}
