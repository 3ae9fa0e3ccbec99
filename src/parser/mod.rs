//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that turns a token
//! sequence into a `Program` tree. It handles:
//!
//! - Declarations introduced by a keyword (`int x = 1 + 2;`)
//! - Assignments and bare references (`x = 5;`, `x;`)
//! - Flat expressions with nested parenthesized groups
//!
//! Statements are dispatched through a lookup table keyed by token kind.
//! Malformed statements degrade to partial nodes; an unclosed parenthesis
//! is the only error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
