//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: every command accepts the others' flags without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Positional shifting: -q shifts the lone positional to the document
//! 4. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use labex_lib::{FuelLimits, Verbosity};

use super::*;
use crate::cli::commands::{ast_command, check_command, dump_command, exec_command, trace_command};
use crate::commands::trace::TraceArgs;

#[test]
fn dump_accepts_runtime_and_trace_flags() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from([
        "dump",
        "rule.lbx",
        "doc.json",
        "--fuel",
        "500",
        "-vv",
        "--compact",
    ]);
    assert!(
        result.is_ok(),
        "dump should accept runtime flags: {:?}",
        result.err()
    );

    let params = DumpParams::from_matches(&result.unwrap());
    assert_eq!(params.query_path, Some(PathBuf::from("rule.lbx")));
    assert_eq!(params.doc_path, Some(PathBuf::from("doc.json")));
}

#[test]
fn exec_accepts_trace_flags() {
    let cmd = exec_command();
    let result = cmd.try_get_matches_from([
        "exec",
        "rule.lbx",
        "doc.json",
        "-vv",
        "--no-result",
        "--raw",
    ]);
    assert!(
        result.is_ok(),
        "exec should accept trace flags: {:?}",
        result.err()
    );
}

#[test]
fn trace_accepts_exec_flags() {
    let cmd = trace_command();
    let result = cmd.try_get_matches_from(["trace", "rule.lbx", "doc.json", "--compact"]);
    assert!(
        result.is_ok(),
        "trace should accept exec flags: {:?}",
        result.err()
    );
}

#[test]
fn ast_accepts_document_positional() {
    let cmd = ast_command();
    let result = cmd.try_get_matches_from(["ast", "rule.lbx", "doc.json", "--fuel", "10"]);
    assert!(
        result.is_ok(),
        "ast should accept a document: {:?}",
        result.err()
    );

    let params = AstParams::from_matches(&result.unwrap());
    assert_eq!(params.query_path, Some(PathBuf::from("rule.lbx")));
}

#[test]
fn check_document_is_optional() {
    let m = check_command()
        .try_get_matches_from(["check", "rule.lbx"])
        .unwrap();

    let params = CheckParams::from_matches(&m);
    assert_eq!(params.query_path, Some(PathBuf::from("rule.lbx")));
    assert_eq!(params.doc_path, None);
}

#[test]
fn dump_help_hides_runtime_flags() {
    let mut cmd = dump_command();
    let help = cmd.render_help().to_string();

    assert!(!help.contains("--fuel"), "dump help should hide --fuel");
    assert!(!help.contains("--compact"), "dump help should hide --compact");
    assert!(!help.contains("--no-result"), "dump help should hide --no-result");
    assert!(!help.contains("--raw"), "dump help should hide --raw");
    assert!(help.contains("--color"), "dump help should show --color");
}

#[test]
fn exec_help_shows_runtime_flags() {
    let mut cmd = exec_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--fuel"), "exec help should show --fuel");
    assert!(help.contains("--compact"), "exec help should show --compact");
    assert!(!help.contains("--no-result"), "exec help should hide --no-result");
}

#[test]
fn trace_help_shows_verbosity() {
    let mut cmd = trace_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("-v"), "trace help should show -v");
    assert!(help.contains("--no-result"), "trace help should show --no-result");
    assert!(!help.contains("--compact"), "trace help should hide --compact");
}

#[test]
fn exec_query_text_shifts_positional_to_document() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-q", "Gene", "doc.json"])
        .unwrap();

    let params = ExecParams::from_matches(&m);
    assert_eq!(params.query_text.as_deref(), Some("Gene"));
    assert_eq!(params.query_path, None);
    assert_eq!(params.doc_path, Some(PathBuf::from("doc.json")));
}

#[test]
fn two_positionals_are_not_shifted() {
    let m = trace_command()
        .try_get_matches_from(["trace", "-q", "Gene", "rule.lbx", "doc.json"])
        .unwrap();

    let params = TraceParams::from_matches(&m);
    assert_eq!(params.query_path, Some(PathBuf::from("rule.lbx")));
    assert_eq!(params.doc_path, Some(PathBuf::from("doc.json")));
}

#[test]
fn exec_extracts_limits() {
    let m = exec_command()
        .try_get_matches_from([
            "exec",
            "rule.lbx",
            "doc.json",
            "--fuel",
            "500",
            "--checkpoints",
            "8",
            "--compact",
        ])
        .unwrap();

    let params = ExecParams::from_matches(&m);
    assert!(params.compact);
    assert_eq!(
        params.limits,
        FuelLimits::new().exec_fuel(500).checkpoint_limit(8)
    );
}

#[test]
fn limits_default_to_runtime_defaults() {
    let m = exec_command()
        .try_get_matches_from(["exec", "rule.lbx", "doc.json"])
        .unwrap();

    assert_eq!(ExecParams::from_matches(&m).limits, FuelLimits::default());
}

#[test]
fn trace_verbosity_counts_flags() {
    let m = trace_command()
        .try_get_matches_from(["trace", "rule.lbx", "doc.json", "-vv"])
        .unwrap();

    let params = TraceParams::from_matches(&m);
    assert_eq!(params.verbose, 2);

    let args: TraceArgs = params.into();
    assert_eq!(args.verbosity, Verbosity::VeryVerbose);
}

#[test]
fn color_flag_is_parsed() {
    let m = dump_command()
        .try_get_matches_from(["dump", "rule.lbx", "doc.json", "--color", "never"])
        .unwrap();

    let params = DumpParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Never);
    assert!(!params.color.should_colorize());
}

#[test]
fn invalid_color_is_rejected() {
    let result = dump_command().try_get_matches_from(["dump", "rule.lbx", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["labex"]);

    assert!(result.is_err());
}
