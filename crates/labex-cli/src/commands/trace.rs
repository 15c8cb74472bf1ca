//! Trace pattern execution for debugging.

use std::path::PathBuf;

use labex_lib::{Colors, FuelLimits, LabelSource, Pattern, PrintTracer, Verbosity};

use super::document_loader::load_document;
use super::exec::to_json;
use super::query_loader::load_query;
use super::{compile, require_doc};
use crate::Result;
use crate::error::CliError;

pub struct TraceArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub verbosity: Verbosity,
    pub no_result: bool,
    pub limits: FuelLimits,
    pub color: bool,
}

pub fn run(args: TraceArgs) -> Result<()> {
    let source = load_query(args.query_path.as_deref(), args.query_text.as_deref())?;
    let loaded = load_document(require_doc(args.doc_path.as_deref(), "trace")?)?;
    let pattern = compile(&loaded.registry, &source, args.color)?;

    let colors = Colors::new(args.color);
    let (lines, outcome) = trace(&pattern, &loaded.document, &args, colors);
    print!("{lines}");
    let matches = outcome?;

    if args.no_result {
        return Ok(());
    }
    println!("{}---{}", colors.dim, colors.reset);
    println!("{}", to_json(&matches, true)?);
    Ok(())
}

/// Runs every search of `pattern`, returning the trace and the matches.
///
/// The trace is returned even when a search fails, since it shows where.
fn trace(
    pattern: &Pattern,
    doc: &dyn LabelSource,
    args: &TraceArgs,
    colors: Colors,
) -> (String, Result<Vec<labex_lib::MatchValue>>) {
    let mut tracer = PrintTracer::new(pattern.program(), doc.text(), args.verbosity, colors);
    let mut searcher = pattern.searcher_with_limits(doc, args.limits);

    let mut matches = Vec::new();
    let outcome = loop {
        match searcher.search_with(&mut tracer) {
            Ok(true) => matches.extend(searcher.match_value()),
            Ok(false) => break Ok(matches),
            Err(err) => break Err(CliError::Runtime(err)),
        }
    };
    (tracer.output(), outcome)
}
