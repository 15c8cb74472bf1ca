//! labex: label-sequence patterns over annotated text.
//!
//! A pattern is compiled once against a [`TypeRegistry`] and then searched
//! over any [`LabelSource`], such as an in-memory [`Document`].
//!
//! # Example
//!
//! ```
//! use labex_lib::{AttrKind, AttrMap, Document, Label, Span, TypeRegistry};
//!
//! let mut registry = TypeRegistry::new();
//! registry
//!     .register_dynamic("Token")
//!     .unwrap()
//!     .attribute("text", AttrKind::Text);
//! let token = registry.id_of("Token").unwrap();
//!
//! let text = "BRCA1 binds";
//! let doc = Document::builder(text)
//!     .label(Label::new(token, Span::new(0, 5), AttrMap::new().with("text", "BRCA1")))
//!     .label(Label::new(token, Span::new(6, 11), AttrMap::new().with("text", "binds")))
//!     .build()
//!     .unwrap();
//!
//! let pattern = labex_lib::compile(&registry, r#"Token<text="binds">"#).unwrap();
//! assert_eq!(pattern.find_all(&doc).unwrap(), [Span::new(6, 11)]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod pattern;

#[cfg(test)]
mod pattern_tests;

pub use pattern::Pattern;

pub use labex_compiler::{Diagnostics, DiagnosticsPrinter, QueryBuilder};
pub use labex_core::{
    AttrKind, AttrMap, AttrValue, Colors, Document, DocumentError, Label, LabelSource,
    LabelTypeId, Program, RegistryError, Span, TypeRegistry,
};
pub use labex_vm::{
    Captures, FuelLimits, MatchValue, PrintTracer, RuntimeError, Searcher, Tracer, Verbosity,
};

/// Errors from compiling or running a pattern.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] labex_compiler::Error),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Compiler diagnostics, when the pattern failed to compile.
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::Compile(err) => err.diagnostics(),
            Error::Runtime(_) => None,
        }
    }

    /// Renders the diagnostics against `source`, or the error message.
    pub fn render(&self, source: &str) -> String {
        match self.diagnostics() {
            Some(diag) => diag.render_filtered(source),
            None => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Compiles `source` against `registry` with default limits.
pub fn compile(registry: &TypeRegistry, source: &str) -> Result<Pattern> {
    match labex_compiler::compile(registry, source) {
        Ok(program) => {
            tracing::debug!(
                pattern = source,
                steps = program.len(),
                captures = program.captures().len(),
                "compiled pattern"
            );
            Ok(Pattern::new(program))
        }
        Err(err) => {
            tracing::debug!(pattern = source, error = %err, "pattern rejected");
            Err(err.into())
        }
    }
}
