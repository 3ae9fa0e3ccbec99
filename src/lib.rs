#![allow(clippy::module_inception)]

use serde::Serialize;

use crate::{
    ast::ast::SyntaxNode,
    errors::errors::{LexError, ParseError},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A half-open range of char offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Everything the front end produces for one source string.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub lex_errors: Vec<LexError>,
    pub tree: SyntaxNode,
}

/// Runs the lexer and the parser over `source`.
///
/// Lexer errors never stop the pipeline: they are returned next to the tree,
/// and the parser only sees the tokens that were recognised. A parse error
/// aborts the whole analysis.
#[tracing::instrument(level = "trace", skip_all)]
pub fn analyze(source: &str) -> Result<Analysis, ParseError> {
    let scan = tokenize(source);
    let tree = parse(&scan.tokens)?;

    Ok(Analysis {
        tokens: scan.tokens,
        lex_errors: scan.errors,
        tree,
    })
}

/// Returns the 1-based line number, the line text and the char column of a
/// char offset. Offsets at or past the end point just after the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return (line_number, line.to_string(), position - start);
        }

        let trimmed = line.trim_end_matches('\n');
        last = (line_number, trimmed.to_string(), trimmed.chars().count());

        start = end;
        line_number += 1;
    }

    if source.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    last
}
