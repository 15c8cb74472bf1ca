//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! All commands accept the full flag set so a command line can be switched
//! between `dump`, `exec` and `trace` by changing the verb; flags a command
//! does not use are hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Add hidden document input (for commands that don't read one).
fn with_hidden_doc_args(cmd: Command) -> Command {
    cmd.arg(doc_path_arg().hide(true))
}

/// Add hidden exec output args (for commands that don't produce JSON).
fn with_hidden_exec_args(cmd: Command) -> Command {
    cmd.arg(compact_arg().hide(true))
}

/// Add hidden runtime args (for commands that don't run the pattern).
fn with_hidden_runtime_args(cmd: Command) -> Command {
    cmd.arg(fuel_arg().hide(true))
        .arg(checkpoint_limit_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
        .arg(no_result_arg().hide(true))
}

/// Add hidden CST args (for commands that don't print the CST).
fn with_hidden_ast_args(cmd: Command) -> Command {
    cmd.arg(raw_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("labex")
        .about("Label-sequence patterns over annotated text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Show the concrete syntax tree of an expression.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the syntax tree of an expression")
        .override_usage(
            "\
  labex ast <QUERY>
  labex ast -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  labex ast rule.lbx                  # expression from file
  labex ast -q 'g:Gene Token+'        # inline expression
  labex ast -q 'Gene' --raw           # include whitespace and spans"#,
        )
        .arg(query_path_arg())
        .arg(query_text_arg())
        .arg(raw_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_runtime_args(with_hidden_exec_args(
        with_hidden_doc_args(cmd),
    )))
}

/// Validate an expression, optionally against a document's label types.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an expression")
        .override_usage(
            "\
  labex check <QUERY> [DOC]
  labex check -q <TEXT> [DOC]",
        )
        .after_help(
            r#"EXAMPLES:
  labex check rule.lbx                # syntax only
  labex check rule.lbx doc.json       # also resolve types and attributes
  labex check -q 'Gene<x=1>' doc.json # inline expression"#,
        )
        .arg(query_path_arg())
        .arg(doc_path_arg())
        .arg(query_text_arg())
        .arg(color_arg());

    with_hidden_ast_args(with_hidden_trace_args(with_hidden_runtime_args(
        with_hidden_exec_args(cmd),
    )))
}

/// Show the compiled program.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled program")
        .override_usage(
            "\
  labex dump <QUERY> <DOC>
  labex dump -q <TEXT> <DOC>",
        )
        .after_help(
            r#"EXAMPLES:
  labex dump rule.lbx types.json      # types from a document or schema
  labex dump -q 'Gene+?' types.json   # inline expression"#,
        )
        .arg(query_path_arg())
        .arg(doc_path_arg())
        .arg(query_text_arg())
        .arg(color_arg());

    with_hidden_ast_args(with_hidden_trace_args(with_hidden_runtime_args(
        with_hidden_exec_args(cmd),
    )))
}

/// Search a document and print matches as JSON.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Search a document and print matches as JSON")
        .override_usage(
            "\
  labex exec <QUERY> <DOC>
  labex exec -q <TEXT> <DOC>",
        )
        .after_help(
            r#"EXAMPLES:
  labex exec rule.lbx doc.json            # two positional files
  labex exec -q 'g:Gene Token' doc.json   # inline expression
  labex exec -q 'Gene' - < doc.json       # document from stdin"#,
        )
        .arg(query_path_arg())
        .arg(doc_path_arg())
        .arg(query_text_arg())
        .arg(color_arg())
        .arg(compact_arg())
        .arg(fuel_arg())
        .arg(checkpoint_limit_arg());

    with_hidden_ast_args(with_hidden_trace_args(cmd))
}

/// Trace pattern execution for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace pattern execution for debugging")
        .override_usage(
            "\
  labex trace <QUERY> <DOC>
  labex trace -q <TEXT> <DOC>",
        )
        .after_help(
            r#"EXAMPLES:
  labex trace rule.lbx doc.json           # two positional files
  labex trace -q 'Gene?' doc.json -vv     # show checkpoints and cuts
  labex trace -q 'Gene+' doc.json --fuel 50"#,
        )
        .arg(query_path_arg())
        .arg(doc_path_arg())
        .arg(query_text_arg())
        .arg(color_arg())
        .arg(verbose_arg())
        .arg(no_result_arg())
        .arg(fuel_arg())
        .arg(checkpoint_limit_arg());

    with_hidden_ast_args(with_hidden_exec_args(cmd))
}
