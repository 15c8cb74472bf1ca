mod cli;
mod commands;
mod error;
mod logging;

use cli::{AstParams, CheckParams, DumpParams, ExecParams, TraceParams, build_cli};
use error::CliError;

fn main() {
    logging::init_logging();
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("ast", m)) => commands::ast::run(AstParams::from_matches(m).into()),
        Some(("check", m)) => commands::check::run(CheckParams::from_matches(m).into()),
        Some(("dump", m)) => commands::dump::run(DumpParams::from_matches(m).into()),
        Some(("exec", m)) => commands::exec::run(ExecParams::from_matches(m).into()),
        Some(("trace", m)) => commands::trace::run(TraceParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result {
        tracing::debug!(error = ?err, "command failed");
        err.report();
        std::process::exit(err.exit_code());
    }
}

type Result<T> = std::result::Result<T, CliError>;
