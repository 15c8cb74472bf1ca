//! Compiler for labex label expressions.
//!
//! Turns expression text into an immutable [`Program`] in three stages:
//! parse (lossless CST with recovery), analyze (bounds and name resolution
//! against a [`TypeRegistry`]) and lower (continuation-passing program
//! construction).
//!
//! # Example
//!
//! ```
//! use labex_compiler::QueryBuilder;
//! use labex_core::{AttrKind, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register_dynamic("Token")
//!     .unwrap()
//!     .attribute("text", AttrKind::Text);
//!
//! let source = r#"first:Token<text="hello"> Token+"#;
//! let query = QueryBuilder::new(source).parse().expect("out of fuel");
//! let program = query.analyze(&registry).compile().expect("valid expression");
//! assert_eq!(program.captures(), ["first"]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod compile;
pub mod diagnostics;
pub mod parser;
pub mod query;

#[cfg(test)]
pub mod test_utils;

use labex_core::{Program, TypeRegistry};

/// Result type for passes that produce both output and diagnostics.
///
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use compile::CompileError;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use query::{Query, QueryAnalyzed, QueryBuilder, QueryParsed};

/// Errors that can occur while compiling an expression.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("expression parsing failed with {} errors", .0.error_count())]
    QueryParseError(Diagnostics),

    #[error("expression analysis failed with {} errors", .0.error_count())]
    QueryAnalyzeError(Diagnostics),
}

impl Error {
    /// Collected diagnostics, if the failure carries any.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::QueryParseError(diag) | Error::QueryAnalyzeError(diag) => Some(diag),
            Error::ExecFuelExhausted | Error::RecursionLimitExceeded => None,
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses, resolves and lowers `source` with default limits.
pub fn compile(registry: &TypeRegistry, source: &str) -> Result<Program> {
    QueryBuilder::new(source).parse()?.analyze(registry).compile()
}
