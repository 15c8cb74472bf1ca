use crate::Query;
use indoc::indoc;

#[test]
fn single_type() {
    let input = indoc! {r#"
    Token
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TypeMatch
          Id "Token"
    "#);
}

#[test]
fn juxtaposition() {
    let input = indoc! {r#"
    Token Gene Protein
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TypeMatch
          Id "Token"
        TypeMatch
          Id "Gene"
        TypeMatch
          Id "Protein"
    "#);
}

#[test]
fn capture() {
    let input = indoc! {r#"
    w:Token
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Capture
          Id "w"
          Colon ":"
          TypeMatch
            Id "Token"
    "#);
}

#[test]
fn alternation() {
    let input = indoc! {r#"
    Gene | Protein Disease
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Alt
        Seq
          TypeMatch
            Id "Gene"
        Pipe "|"
        Seq
          TypeMatch
            Id "Protein"
          TypeMatch
            Id "Disease"
    "#);
}

#[test]
fn text_gap() {
    let input = indoc! {r#"
    Token -> Gene
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TypeMatch
          Id "Token"
        TextGap
          Arrow "->"
        TypeMatch
          Id "Gene"
    "#);
}

#[test]
fn leading_text_gap() {
    let input = indoc! {r#"
    -> Gene
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TextGap
          Arrow "->"
        TypeMatch
          Id "Gene"
    "#);
}

#[test]
fn empty_expression() {
    let res = Query::expect_valid_cst("");

    insta::assert_snapshot!(res, @r"
    Root
      Seq
    ");
}
