use std::path::PathBuf;

use labex_core::program::dump;
use labex_lib::Colors;

use super::document_loader::load_document;
use super::query_loader::load_query;
use super::{compile, require_doc};
use crate::Result;

pub struct DumpArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: DumpArgs) -> Result<()> {
    let source = load_query(args.query_path.as_deref(), args.query_text.as_deref())?;
    let loaded = load_document(require_doc(args.doc_path.as_deref(), "dump")?)?;
    let pattern = compile(&loaded.registry, &source, args.color)?;

    print!("{}", dump(pattern.program(), Colors::new(args.color)));
    Ok(())
}
