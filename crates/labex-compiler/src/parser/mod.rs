//! Parser infrastructure for label expressions.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: quantifiers and `[^T]` retroactively wrap the item before them
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree.
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Malformed predicate lists resynchronize at `,` `>` and closers
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod printer;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod tests;

pub use ast::{
    Alt, Binding, Bounds, Capture, Contains, Expr, Group, Lookahead, NamedGroup, Pin, Predicate,
    Quantifier, QuantifierOp, Root, Seq, TextGap, TypeMatch,
};
pub use core::{ParseResult, Parser};
pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};
pub use printer::CstPrinter;

use crate::Error;
use lexer::lex;

/// Parses with no fuel limits. Returns `Err` only on fuel exhaustion.
pub fn parse(source: &str) -> Result<ParseResult, Error> {
    Parser::new(source, lex(source)).parse()
}
