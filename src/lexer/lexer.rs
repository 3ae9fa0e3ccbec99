use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{errors::errors::LexError, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_WORDS};

pub type RegexHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("token patterns are valid regexes"),
        handler,
    }
}

fn keyword_regex() -> String {
    let mut words = RESERVED_WORDS.iter().copied().collect::<Vec<_>>();
    words.sort_unstable();
    format!("^(?:{})\\b", words.join("|"))
}

lazy_static! {
    /// Tried in order at every position, first match wins. Multi-character
    /// operators sit before their one-character prefixes and keywords before
    /// identifiers.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^(?://[^\n]*|/\*(?s:.)*?\*/)", skip_handler),
        pattern(r#"^"[^"\\]*(?:\\(?s:.)[^"\\]*)*""#, MK_DEFAULT_HANDLER!(TokenKind::String)),
        pattern(&keyword_regex(), MK_DEFAULT_HANDLER!(TokenKind::Keyword)),
        pattern(r"^(?:==|!=|<=|>=|<|>)", MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator)),
        pattern(r"^(?:\|\||&&|!)", MK_DEFAULT_HANDLER!(TokenKind::LogicalOperator)),
        pattern(r"^(?:\+=|-=|\*=|/=|%=|&=|\|=|\^=)", MK_DEFAULT_HANDLER!(TokenKind::CompoundAssignment)),
        pattern(r"^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment)),
        pattern(r"^[+\-*/%]", MK_DEFAULT_HANDLER!(TokenKind::Operator)),
        pattern(r"^[A-Za-z_][A-Za-z0-9_]*", MK_DEFAULT_HANDLER!(TokenKind::Identifier)),
        pattern(r"^[0-9]+(?:\.[0-9]+)?", MK_DEFAULT_HANDLER!(TokenKind::Number)),
        pattern(r"^[(){};,]", MK_DEFAULT_HANDLER!(TokenKind::Delimiter)),
        pattern(r"^\s+", skip_handler),
    ];
}

/// Result of scanning one source string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scan {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
    /// Chars consumed by whitespace and comments.
    pub skipped: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset into `source`.
    pos: usize,
    /// Char offset into `source`, used for every reported position.
    char_pos: usize,
    scan: Scan,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            char_pos: 0,
            scan: Scan::default(),
        }
    }

    pub fn advance(&mut self, matched: &str) {
        self.pos += matched.len();
        self.char_pos += matched.chars().count();
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, "matched token");
        self.scan.tokens.push(token);
    }

    pub fn span_of(&self, matched: &str) -> Span {
        Span {
            start: self.char_pos,
            end: self.char_pos + matched.chars().count(),
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Records the current character as unexpected and steps over it.
    fn reject(&mut self) {
        let Some(character) = self.remainder().chars().next() else {
            return;
        };

        debug!(%character, position = self.char_pos, "skipping unexpected character");
        self.scan.errors.push(LexError {
            character,
            position: self.char_pos,
        });
        self.pos += character.len_utf8();
        self.char_pos += 1;
    }

    fn finish(self) -> Scan {
        self.scan
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.scan.skipped += matched.chars().count();
    lexer.advance(matched);
}

/// Scans `source` into tokens. Never fails: characters no rule accepts are
/// reported in `Scan::errors` and skipped one at a time.
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize(source: &str) -> Scan {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .filter(|found| !found.is_empty())
                .map(|found| (pattern.handler, found.as_str()))
        });

        match matched {
            Some((handler, text)) => handler(&mut lex, text),
            None => lex.reject(),
        }
    }

    lex.finish()
}
