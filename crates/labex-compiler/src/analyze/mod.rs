//! Semantic analysis: registry resolution and quantifier validation.
//!
//! Runs on a parsed tree and records what the compiler needs:
//! - `resolve` - type names, attributes, and predicate literals
//! - `bounds` - repetition ranges of quantifiers
//! - `literal` - literal token decoding
//! - `visitor` - AST traversal shared by the passes

pub mod bounds;
pub mod literal;
pub mod resolve;
pub mod visitor;

#[cfg(test)]
mod bounds_tests;
#[cfg(test)]
mod resolve_tests;

pub use bounds::{MAX_REPEAT, Repeat, Repeats, validate_bounds};
pub use resolve::{LabelTests, resolve_types};
pub use visitor::Visitor;

use labex_core::TypeRegistry;

use crate::diagnostics::Diagnostics;
use crate::parser::Root;

/// Everything the compiler looks up by AST node.
#[derive(Debug, Default)]
pub struct Analysis {
    pub tests: LabelTests,
    pub repeats: Repeats,
}

pub fn analyze(ast: &Root, registry: &TypeRegistry, diag: &mut Diagnostics) -> Analysis {
    let repeats = validate_bounds(ast, diag);
    let tests = resolve_types(ast, registry, diag);
    Analysis { tests, repeats }
}
