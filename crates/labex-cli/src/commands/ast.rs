//! Show the syntax tree of an expression.

use std::path::PathBuf;

use labex_lib::QueryBuilder;

use super::query_loader::load_query;
use crate::Result;
use crate::error::CliError;

pub struct AstArgs {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) -> Result<()> {
    let source = load_query(args.query_path.as_deref(), args.query_text.as_deref())?;
    print!("{}", render(&source, args.raw, args.color)?);
    Ok(())
}

/// The CST, with syntax errors reported on stderr.
///
/// The tree is printed even when it contains errors, since error nodes are
/// what this command is for.
fn render(source: &str, raw: bool, color: bool) -> Result<String> {
    let query = QueryBuilder::new(source)
        .parse()
        .map_err(|err| CliError::Compile(err.into()))?;

    if !query.is_valid() {
        eprint!(
            "{}",
            query
                .diagnostics()
                .render_filtered_colored(source, color)
        );
    }

    Ok(if raw {
        query.dump_cst_full()
    } else {
        query.dump_cst()
    })
}
