use crate::Query;
use indoc::indoc;

#[test]
fn quantifier_operators() {
    let input = indoc! {r#"
    Token? Gene* Protein+
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Quantifier
          TypeMatch
            Id "Token"
          Question "?"
        Quantifier
          TypeMatch
            Id "Gene"
          Star "*"
        Quantifier
          TypeMatch
            Id "Protein"
          Plus "+"
    "#);
}

#[test]
fn quantifier_modifiers() {
    let input = indoc! {r#"
    Token+? Protein*+
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Quantifier
          TypeMatch
            Id "Token"
          Plus "+"
          Question "?"
        Quantifier
          TypeMatch
            Id "Protein"
          Star "*"
          Plus "+"
    "#);
}

#[test]
fn quantifier_bounds() {
    let input = indoc! {r#"
    Gene{2,3} Token{1,}?
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Quantifier
          TypeMatch
            Id "Gene"
          Bounds
            BraceOpen "{"
            Int "2"
            Comma ","
            Int "3"
            BraceClose "}"
        Quantifier
          TypeMatch
            Id "Token"
          Bounds
            BraceOpen "{"
            Int "1"
            Comma ","
            BraceClose "}"
          Question "?"
    "#);
}

#[test]
fn quantified_group() {
    let input = indoc! {r#"
    (Token Gene){2}
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Quantifier
          Group
            ParenOpen "("
            Seq
              TypeMatch
                Id "Token"
              TypeMatch
                Id "Gene"
            ParenClose ")"
          Bounds
            BraceOpen "{"
            Int "2"
            BraceClose "}"
    "#);
}

#[test]
fn quantified_capture() {
    let input = indoc! {r#"
    w:Token+
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Quantifier
          Capture
            Id "w"
            Colon ":"
            TypeMatch
              Id "Token"
          Plus "+"
    "#);
}
