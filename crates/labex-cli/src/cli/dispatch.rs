//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields and ignore hidden ones
//! - `Into<*Args>` impls bridge dispatch and the command handlers
//! - `-q` shifts a lone positional from the expression to the document

use std::path::PathBuf;

use clap::ArgMatches;
use labex_lib::{FuelLimits, Verbosity};

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::trace::TraceArgs;

pub struct AstParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub raw: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            raw: m.get_flag("raw"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            raw: p.raw,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let (query_path, query_text, doc_path) = inputs(m);
        Self {
            query_path,
            query_text,
            doc_path,
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            doc_path: p.doc_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub color: ColorChoice,
    // Note: compact, fuel, checkpoints, verbose, no_result and raw are
    // parsed but not extracted
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let (query_path, query_text, doc_path) = inputs(m);
        Self {
            query_path,
            query_text,
            doc_path,
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            doc_path: p.doc_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub compact: bool,
    pub limits: FuelLimits,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let (query_path, query_text, doc_path) = inputs(m);
        Self {
            query_path,
            query_text,
            doc_path,
            compact: m.get_flag("compact"),
            limits: parse_limits(m),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            doc_path: p.doc_path,
            pretty,
            limits: p.limits,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub doc_path: Option<PathBuf>,
    pub verbose: u8,
    pub no_result: bool,
    pub limits: FuelLimits,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let (query_path, query_text, doc_path) = inputs(m);
        Self {
            query_path,
            query_text,
            doc_path,
            verbose: m.get_count("verbose"),
            no_result: m.get_flag("no_result"),
            limits: parse_limits(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            query_path: p.query_path,
            query_text: p.query_text,
            doc_path: p.doc_path,
            verbosity,
            no_result: p.no_result,
            limits: p.limits,
            color: p.color.should_colorize(),
        }
    }
}

/// Expression and document inputs, with positional shifting applied.
fn inputs(m: &ArgMatches) -> (Option<PathBuf>, Option<String>, Option<PathBuf>) {
    let query_text = m.get_one::<String>("query_text").cloned();
    let (query_path, doc_path) = shift_positional_to_doc(
        query_text.is_some(),
        m.get_one::<PathBuf>("query_path").cloned(),
        m.get_one::<PathBuf>("doc_path").cloned(),
    );
    (query_path, query_text, doc_path)
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Fuel stays unlimited unless `--fuel` is given.
fn parse_limits(m: &ArgMatches) -> FuelLimits {
    let mut limits = FuelLimits::new();
    if let Some(&fuel) = m.get_one::<u32>("fuel") {
        limits = limits.exec_fuel(fuel);
    }
    if let Some(&checkpoints) = m.get_one::<u32>("checkpoints") {
        limits = limits.checkpoint_limit(checkpoints);
    }
    limits
}

/// When -q is used with a single positional arg, shift it from expression
/// to document. This enables: `labex exec -q 'Gene' doc.json`
fn shift_positional_to_doc(
    has_query_text: bool,
    query_path: Option<PathBuf>,
    doc_path: Option<PathBuf>,
) -> (Option<PathBuf>, Option<PathBuf>) {
    if has_query_text && query_path.is_some() && doc_path.is_none() {
        (None, query_path)
    } else {
        (query_path, doc_path)
    }
}
