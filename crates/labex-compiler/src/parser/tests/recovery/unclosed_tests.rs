use rowan::TextRange;

use crate::Query;
use crate::diagnostics::DiagnosticKind;

fn first_error(src: &str) -> (DiagnosticKind, TextRange) {
    let query = Query::expect(src);
    let filtered = query.diagnostics().filtered();
    let diag = filtered.first().expect("expected a diagnostic");
    (diag.kind(), diag.range())
}

#[test]
fn unclosed_group_spans_to_eof() {
    assert_eq!(
        first_error("(Token Gene"),
        (
            DiagnosticKind::UnclosedGroup,
            TextRange::new(0.into(), 11.into())
        )
    );
}

#[test]
fn unclosed_named_group() {
    let (kind, _) = first_error("(?<span> Token");

    assert_eq!(kind, DiagnosticKind::UnclosedGroup);
}

#[test]
fn unclosed_lookahead() {
    let (kind, _) = first_error("Token (?!Gene");

    assert_eq!(kind, DiagnosticKind::UnclosedLookahead);
}

#[test]
fn unclosed_pin() {
    let (kind, range) = first_error("Token [Gene Protein");

    assert_eq!(kind, DiagnosticKind::UnclosedPin);
    assert_eq!(range, TextRange::new(6.into(), 19.into()));
}

#[test]
fn unclosed_contains() {
    let (kind, _) = first_error("Sentence[^Gene");

    assert_eq!(kind, DiagnosticKind::UnclosedPin);
}

#[test]
fn unclosed_predicates() {
    let (kind, range) = first_error("Token<pos=e<NN>");

    assert_eq!(kind, DiagnosticKind::UnclosedPredicates);
    assert_eq!(range, TextRange::new(5.into(), 15.into()));
}

#[test]
fn unclosed_bounds() {
    let (kind, _) = first_error("Token{2,3");

    assert_eq!(kind, DiagnosticKind::UnclosedBounds);
}

#[test]
fn unclosed_reports_where_it_started() {
    let query = Query::expect("(Token");

    let rendered = query.dump_diagnostics();
    assert!(rendered.contains("missing closing `)`"), "{rendered}");
    assert!(rendered.contains("group started here"), "{rendered}");
}

#[test]
fn mismatched_closer_inside_group() {
    let query = Query::expect("(Token]");

    assert!(!query.is_valid());
}
