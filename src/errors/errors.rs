use std::fmt::Display;

use serde::Serialize;
use thiserror::Error;

/// A character no lexer rule accepts. Recovered locally by skipping it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("unexpected character {character:?} at position {position}")]
pub struct LexError {
    pub character: char,
    /// Char offset into the source.
    pub position: usize,
}

impl LexError {
    pub fn get_error_name(&self) -> &str {
        "UnexpectedCharacter"
    }

    pub fn get_tip(&self) -> ErrorTip {
        ErrorTip::None
    }
}

/// Fatal parse failures, all raised by parenthesized groups: a group with no
/// closing `)`, or groups nested too deeply to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `{expected}` but reached end of input")]
    UnexpectedEof { expected: String, position: usize },
    #[error("expected `{expected}`, found `{found}`")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize, position: usize },
}

impl ParseError {
    /// Description of the token the parser required. Past the nesting limit
    /// every open group is still waiting for its `)`.
    pub fn expected(&self) -> &str {
        match self {
            ParseError::UnexpectedEof { expected, .. } => expected,
            ParseError::UnexpectedToken { expected, .. } => expected,
            ParseError::NestingTooDeep { .. } => ")",
        }
    }

    /// The offending lexeme, `None` when the input ran out.
    pub fn found(&self) -> Option<&str> {
        match self {
            ParseError::UnexpectedEof { .. } => None,
            ParseError::UnexpectedToken { found, .. } => Some(found),
            ParseError::NestingTooDeep { .. } => Some("("),
        }
    }

    /// Char offset into the source where the error was detected.
    pub fn get_position(&self) -> usize {
        match self {
            ParseError::UnexpectedEof { position, .. } => *position,
            ParseError::UnexpectedToken { position, .. } => *position,
            ParseError::NestingTooDeep { position, .. } => *position,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedEof { .. } => "UnexpectedEof",
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ParseError::UnexpectedEof { expected, .. } => ErrorTip::Suggestion(format!(
                "Input ended early, did you forget a closing `{}`?",
                expected
            )),
            ParseError::UnexpectedToken {
                expected, found, ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected `{}`",
                found, expected
            )),
            ParseError::NestingTooDeep { limit, .. } => ErrorTip::Suggestion(format!(
                "At most {} parenthesized groups may be open at once",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
