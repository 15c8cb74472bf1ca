use crate::Query;
use crate::diagnostics::DiagnosticKind;

fn error_kinds(src: &str) -> Vec<DiagnosticKind> {
    Query::expect(src)
        .diagnostics()
        .iter()
        .map(|d| d.kind())
        .collect()
}

#[test]
fn alias_resolves_to_canonical_type() {
    let query = Query::expect_valid("Tok<pos=e<JJ>|e<DT>>");

    let test = query.analysis().tests.values().next().unwrap();
    assert_eq!(test.type_name, "Token");
    assert_eq!(test.to_string(), "Token<pos=e<JJ>|e<DT>>");
}

#[test]
fn contains_target_is_resolved() {
    let query = Query::expect_valid("Sentence[^Gene<symbol=r\"BR.*\">]");

    let names: Vec<_> = query
        .analysis()
        .tests
        .values()
        .map(|t| t.to_string())
        .collect();
    assert_eq!(names, ["Sentence", r#"Gene<symbol=r"BR.*">"#]);
}

#[test]
fn unknown_type() {
    let res = Query::expect_invalid("Gene Foo");

    insta::assert_snapshot!(res, @r"
    error: `Foo` is not a registered label type
      |
    1 | Gene Foo
      |      ^^^
    ");
}

#[test]
fn unknown_attribute() {
    let res = Query::expect_invalid(r#"Gene<color="red">"#);

    insta::assert_snapshot!(res, @r#"
    error: `Gene` has no attribute `color`
      |
    1 | Gene<color="red">
      |      ^^^^^
    "#);
}

#[test]
fn unknown_enum_constant() {
    let res = Query::expect_invalid("Disease<severity=e<FATAL>>");

    insta::assert_snapshot!(res, @r"
    error: `severity` has no constant `FATAL`
      |
    1 | Disease<severity=e<FATAL>>
      |                  ^^^^^^^^
    ");
}

#[test]
fn enum_literal_on_text_attribute() {
    let res = Query::expect_invalid("Gene<text=e<NN>>");

    insta::assert_snapshot!(res, @r"
    error: enum constant literal cannot be compared with text attribute `text`
      |
    1 | Gene<text=e<NN>>
      |           ^^^^^
    ");
}

#[test]
fn integer_literal_on_enum_attribute() {
    let res = Query::expect_invalid("Token<pos=3>");

    insta::assert_snapshot!(res, @r"
    error: integer literal cannot be compared with enum attribute `pos`
      |
    1 | Token<pos=3>
      |           ^
    ");
}

#[test]
fn invalid_regex_points_into_pattern() {
    let query = Query::expect(r#"Gene<text=r"(ab">"#);

    let diag = query.diagnostics().iter().next().unwrap();
    assert_eq!(diag.kind(), DiagnosticKind::InvalidRegex);
    assert_eq!(diag.message(), "invalid regular expression: unclosed group");
    assert_eq!(u32::from(diag.range().start()), 12);
}

#[test]
fn backreference_is_rejected() {
    let res = Query::expect_invalid(r#"Gene<text=r"(a)\1">"#);

    assert!(res.contains("backreferences are not supported"), "{res}");
}

#[test]
fn unicode_word_boundary_is_rejected() {
    assert_eq!(
        error_kinds(r#"Gene<text=r"\bBR">"#),
        [DiagnosticKind::InvalidRegex]
    );
}

#[test]
fn oversized_regex_is_reported() {
    assert_eq!(
        error_kinds(r#"Gene<text=r"[ab]*a[ab]{20}">"#),
        [DiagnosticKind::InvalidRegex]
    );
}

#[test]
fn every_bad_predicate_is_reported() {
    assert_eq!(
        error_kinds(r#"Gene<color="x", text=e<NN>> Nope"#),
        [
            DiagnosticKind::UnknownAttribute,
            DiagnosticKind::IncompatibleLiteral,
            DiagnosticKind::UnknownType,
        ]
    );
}

#[test]
fn invalid_type_match_is_not_resolved() {
    let query = Query::expect(r#"Gene<color="x"> Protein"#);

    assert_eq!(query.analysis().tests.len(), 1);
}

#[test]
fn syntax_errors_hide_resolution_errors() {
    let res = Query::expect_invalid("Foo ->");

    insta::assert_snapshot!(res, @r"
    error: `->` must be followed by an expression
      |
    1 | Foo ->
      |     ^^
    ");
}
