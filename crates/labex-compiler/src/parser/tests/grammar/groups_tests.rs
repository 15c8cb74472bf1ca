use crate::Query;
use indoc::indoc;

#[test]
fn plain_and_named_groups() {
    let input = indoc! {r#"
    (?<span> Token) (Gene)
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        NamedGroup
          NamedGroupOpen "(?<"
          Id "span"
          AngleClose ">"
          Seq
            TypeMatch
              Id "Token"
          ParenClose ")"
        Group
          ParenOpen "("
          Seq
            TypeMatch
              Id "Gene"
          ParenClose ")"
    "#);
}

#[test]
fn alternation_inside_group() {
    let input = indoc! {r#"
    (Gene | Protein)
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Group
          ParenOpen "("
          Alt
            Seq
              TypeMatch
                Id "Gene"
            Pipe "|"
            Seq
              TypeMatch
                Id "Protein"
          ParenClose ")"
    "#);
}

#[test]
fn lookaheads() {
    let input = indoc! {r#"
    (?=Gene) (?!Protein)
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Lookahead
          LookaheadOpen "(?="
          Seq
            TypeMatch
              Id "Gene"
          ParenClose ")"
        Lookahead
          NegLookaheadOpen "(?!"
          Seq
            TypeMatch
              Id "Protein"
          ParenClose ")"
    "#);
}

#[test]
fn pin_with_contains() {
    let input = indoc! {r#"
    [Token Gene][^Protein]
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Contains
          Pin
            BracketOpen "["
            Seq
              TypeMatch
                Id "Token"
              TypeMatch
                Id "Gene"
            BracketClose "]"
          ContainsOpen "[^"
          TypeMatch
            Id "Protein"
          BracketClose "]"
    "#);
}

#[test]
fn alternation_inside_pin() {
    let input = indoc! {r#"
    [Gene | Protein Token]
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Pin
          BracketOpen "["
          Alt
            Seq
              TypeMatch
                Id "Gene"
            Pipe "|"
            Seq
              TypeMatch
                Id "Protein"
              TypeMatch
                Id "Token"
          BracketClose "]"
    "#);
}

#[test]
fn empty_group() {
    let res = Query::expect_valid_cst("()");

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Group
          ParenOpen "("
          Seq
          ParenClose ")"
    "#);
}
