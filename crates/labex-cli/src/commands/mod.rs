pub mod ast;
pub mod check;
pub mod document_loader;
pub mod dump;
pub mod exec;
pub mod query_loader;
pub mod trace;


use std::path::Path;

use labex_lib::{Pattern, TypeRegistry};

use crate::Result;
use crate::error::CliError;

/// Compiles `source`, rendering diagnostics for the terminal on failure.
pub fn compile(registry: &TypeRegistry, source: &str, color: bool) -> Result<Pattern> {
    labex_lib::compile(registry, source).map_err(|err| match err.diagnostics() {
        Some(diag) => CliError::Diagnostics(diag.render_filtered_colored(source, color)),
        None => CliError::Compile(err),
    })
}

/// The document path, which `command` cannot run without.
pub fn require_doc<'a>(doc_path: Option<&'a Path>, command: &str) -> Result<&'a Path> {
    doc_path.ok_or_else(|| {
        tracing::debug!(command, "missing document argument");
        CliError::Usage("document is required: pass a JSON document after the expression")
    })
}
