//! Error types for the front end.
//!
//! - `LexError`: an unexpected character, collected and skipped by the lexer
//! - `ParseError`: an unclosed parenthesis, which aborts the parse
//! - `ErrorTip`: optional suggestion shown next to a reported error

pub mod errors;
