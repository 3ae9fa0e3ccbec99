use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words: conditionals, loops, `return` and the primitive types,
    /// in both the English and the Spanish spelling.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("do");
        set.insert("return");
        set.insert("int");
        set.insert("float");
        set.insert("char");
        set.insert("void");
        set.insert("double");

        set.insert("si");
        set.insert("sino");
        set.insert("mientras");
        set.insert("para");
        set.insert("retornar");
        set.insert("entero");
        set.insert("flotante");
        set.insert("caracter");
        set.insert("vacío");
        set.insert("doble");
        set.insert("def");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    String,
    Keyword,
    RelationalOperator, // == != <= >= < >
    LogicalOperator,    // || && !
    CompoundAssignment, // += -= *= /= %= &= |= ^=
    Assignment,         // =
    Operator,           // + - * / %
    Identifier,
    Number,
    Delimiter, // ( ) { } ; ,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// True for a delimiter token with exactly this lexeme.
    pub fn is_delimiter(&self, delimiter: &str) -> bool {
        self.kind == TokenKind::Delimiter && self.value == delimiter
    }
}

/// Groups token lexemes by kind, kinds ordered by first appearance.
///
/// Used for the "tokens found" summary: `Identifier: x y z`.
pub fn group_by_kind(tokens: &[Token]) -> Vec<(TokenKind, Vec<&str>)> {
    let mut groups: Vec<(TokenKind, Vec<&str>)> = vec![];

    for token in tokens {
        match groups.iter_mut().find(|(kind, _)| *kind == token.kind) {
            Some((_, values)) => values.push(token.value.as_str()),
            None => groups.push((token.kind, vec![token.value.as_str()])),
        }
    }

    groups
}
