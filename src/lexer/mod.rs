//! Lexical analysis module.
//!
//! Converts source text into a stream of tokens for parsing:
//!
//! - An ordered table of anchored regex rules, first match wins
//! - Keywords, identifiers, numbers, strings, operators and delimiters
//! - Whitespace and comments are consumed but never emitted
//! - Unexpected characters are collected as errors and skipped

pub mod lexer;
pub mod tokens;
