//! Human-readable program dump for debugging and snapshot tests.

use std::fmt::Write as _;

use crate::Colors;

use super::{Program, Step};

/// Renders `program` as a deterministic listing.
///
/// ```text
/// [captures]
/// C0 = word
///
/// [leading]
/// 01
///
/// [steps]
///   00  accept
/// > 02  split 01 | 00
/// ```
pub fn dump(program: &Program, colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();

    if !program.captures().is_empty() {
        writeln!(out, "{}[captures]{}", c.blue, c.reset).unwrap();
        for (i, name) in program.captures().iter().enumerate() {
            writeln!(out, "C{i} = {}{name}{}", c.blue, c.reset).unwrap();
        }
        out.push('\n');
    }

    writeln!(out, "{}[leading]{}", c.blue, c.reset).unwrap();
    match program.leading() {
        Some(leading) => {
            let ids: Vec<String> = leading.iter().map(ToString::to_string).collect();
            writeln!(out, "{}", ids.join(" ")).unwrap();
        }
        None => writeln!(out, "{}(nullable){}", c.dim, c.reset).unwrap(),
    }
    out.push('\n');

    writeln!(out, "{}[steps]{}", c.blue, c.reset).unwrap();
    for (index, step) in program.steps().iter().enumerate() {
        let marker = if index == program.entry().index() {
            '>'
        } else {
            ' '
        };
        writeln!(
            out,
            "{marker} {}{index:02}{}  {}",
            c.dim,
            c.reset,
            format_step(program, step, c)
        )
        .unwrap();
    }

    out
}

/// One-line rendering of a step, shared with execution traces.
pub fn format_step(program: &Program, step: &Step, c: &Colors) -> String {
    let op = step.mnemonic();
    match step {
        Step::Accept => op.to_owned(),
        Step::Label {
            test,
            capture,
            next,
        } => {
            let bind = capture
                .map(|id| format!(" @{}{}{}", c.blue, program.capture_name(id), c.reset))
                .unwrap_or_default();
            format!(
                "{op} {}{test}{}{bind} {}-> {next}{}",
                c.green, c.reset, c.dim, c.reset
            )
        }
        Step::Split { primary, alternate } => {
            format!("{op} {primary} | {alternate}")
        }
        Step::CaptureSpan {
            capture,
            slot,
            next,
        } => format!(
            "{op} {slot} @{}{}{} {}-> {next}{}",
            c.blue,
            program.capture_name(*capture),
            c.reset,
            c.dim,
            c.reset
        ),
        Step::Contains { slot, test, next } => format!(
            "{op} {slot} {}{test}{} {}-> {next}{}",
            c.green, c.reset, c.dim, c.reset
        ),
        Step::LookStart {
            slot, body, after, ..
        } => format!("{op} {slot} {body} {}then {after}{}", c.dim, c.reset),
        Step::LookEnd { slot, after, .. } => {
            format!("{op} {slot} {}-> {after}{}", c.dim, c.reset)
        }
        Step::Save { slot, next }
        | Step::CheckProgress { slot, next }
        | Step::CheckContiguous { slot, next }
        | Step::CheckNoText { slot, next }
        | Step::AtomicStart { slot, next }
        | Step::AtomicEnd { slot, next } => {
            format!("{op} {slot} {}-> {next}{}", c.dim, c.reset)
        }
    }
}
