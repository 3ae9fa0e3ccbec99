//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler that emits one token of a fixed kind
//!
//! These macros keep the lexer's rule table to one line per rule.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler that turns the matched text into a single token.
///
/// Every match is its own token; nothing is merged with the previous one.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[+\\-*/%]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let span = lexer.span_of(matched);
            lexer.push(MK_TOKEN!($kind, String::from(matched), span));
            lexer.advance(matched);
        }
    };
}
