use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn leading_quantifier() {
    let res = Query::expect_invalid("+Token");

    insta::assert_snapshot!(res, @r"
    error: quantifier has nothing to repeat
      |
    1 | +Token
      | ^
    ");
}

#[test]
fn quantifier_after_contains() {
    let res = Query::expect_invalid("Sentence[^Gene]+");

    insta::assert_snapshot!(res, @r"
    error: quantifier has nothing to repeat
      |
    1 | Sentence[^Gene]+
      |                ^
    ");
}

#[test]
fn contains_without_target() {
    let res = Query::expect_invalid("[^Gene]");

    insta::assert_snapshot!(res, @r"
    error: `[^...]` has nothing to look inside
      |
    1 | [^Gene]
      | ^^
    ");
}

#[test]
fn stray_closer() {
    let res = Query::expect_invalid("Token )");

    insta::assert_snapshot!(res, @r"
    error: unexpected token: no matching opening delimiter
      |
    1 | Token )
      |       ^
    ");
}

#[test]
fn garbage_characters() {
    let res = Query::expect_invalid("Token $ Gene");

    insta::assert_snapshot!(res, @r"
    error: unexpected token: not a valid expression
      |
    1 | Token $ Gene
      |       ^
    ");
}

#[test]
fn predicates_without_type() {
    let query = Query::expect("<text=\"x\">");

    let first = query.diagnostics().iter().next().unwrap();
    assert_eq!(first.kind(), DiagnosticKind::UnexpectedToken);
    assert_eq!(
        first.message(),
        "unexpected token: predicates must follow a label type name"
    );
}

#[test]
fn recovery_keeps_later_items() {
    let query = Query::expect("Token $ Gene");

    let root = query.root().as_cst();
    let types: Vec<_> = root
        .descendants()
        .filter_map(crate::parser::TypeMatch::cast)
        .filter_map(|t| t.name())
        .map(|t| t.text().to_owned())
        .collect();
    assert_eq!(types, ["Token", "Gene"]);
}
