use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn dangling_arrow() {
    let res = Query::expect_invalid("Token -> -> Gene");

    insta::assert_snapshot!(res, @r"
    error: `->` must be followed by an expression
      |
    1 | Token -> -> Gene
      |       ^^
    ");
}

#[test]
fn missing_literal() {
    let res = Query::expect_invalid("Token<pos=>");

    insta::assert_snapshot!(res, @r"
    error: expected literal
      |
    1 | Token<pos=>
      |           ^
    ");
}

#[test]
fn missing_literal_after_pipe() {
    let query = Query::expect("Token<pos=e<NN>|>");

    let kinds: Vec<_> = query.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DiagnosticKind::ExpectedLiteral]);
}

#[test]
fn missing_type_after_colon() {
    let res = Query::expect_invalid("(w:)");

    insta::assert_snapshot!(res, @r"
    error: expected label type name
      |
    1 | (w:)
      |    ^
    ");
}

#[test]
fn missing_group_name() {
    let res = Query::expect_invalid("(?<> Token)");

    insta::assert_snapshot!(res, @r"
    error: expected capture name: e.g. `(?<name> A B)`
      |
    1 | (?<> Token)
      |    ^
    ");
}

#[test]
fn missing_attribute_name() {
    let res = Query::expect_invalid("Token<=1>");

    insta::assert_snapshot!(res, @r"
    error: expected attribute name
      |
    1 | Token<=1>
      |       ^
    ");
}

#[test]
fn missing_bound() {
    let res = Query::expect_invalid("Token{}");

    insta::assert_snapshot!(res, @r"
    error: expected repetition count
      |
    1 | Token{}
      |       ^
    ");
}

#[test]
fn empty_pin() {
    let query = Query::expect("Token []");

    let diag = query.diagnostics().iter().next().unwrap();
    assert_eq!(diag.kind(), DiagnosticKind::EmptyPin);
    assert_eq!(
        diag.message(),
        "empty `[]` is not allowed: a pin needs at least one item"
    );
    assert_eq!(query.diagnostics().len(), 1);
}

#[test]
fn cascade_at_eof_reports_once() {
    let query = Query::expect("(Token<pos=");

    let kinds: Vec<_> = query.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, [DiagnosticKind::ExpectedLiteral]);
}
