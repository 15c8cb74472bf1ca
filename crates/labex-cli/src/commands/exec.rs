use std::path::PathBuf;

use labex_lib::{FuelLimits, MatchValue};

use super::document_loader::load_document;
use super::query_loader::{is_stdin, load_query};
use super::{compile, require_doc};
use crate::Result;
use crate::error::CliError;

pub struct ExecArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub pretty: bool,
    pub limits: FuelLimits,
    pub color: bool,
}

pub fn run(args: ExecArgs) -> Result<()> {
    let doc_path = require_doc(args.doc_path.as_deref(), "exec")?;
    if is_stdin(doc_path) && args.query_path.as_deref().is_some_and(is_stdin) {
        return Err(CliError::Usage(
            "expression and document cannot both be read from stdin",
        ));
    }

    let source = load_query(args.query_path.as_deref(), args.query_text.as_deref())?;
    let loaded = load_document(doc_path)?;
    let pattern = compile(&loaded.registry, &source, args.color)?;

    let matches = pattern.matches(&loaded.document, args.limits)?;
    println!("{}", to_json(&matches, args.pretty)?);
    Ok(())
}

pub fn to_json(matches: &[MatchValue], pretty: bool) -> Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(matches)
    } else {
        serde_json::to_string(matches)
    };
    output.map_err(CliError::Output)
}
