use crate::Query;
use indoc::indoc;

#[test]
fn single_predicate() {
    let input = indoc! {r#"
    Gene<text="BRCA1">
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TypeMatch
          Id "Gene"
          Predicates
            AngleOpen "<"
            Predicate
              Id "text"
              Equals "="
              StringLiteral "\"BRCA1\""
            AngleClose ">"
    "#);
}

#[test]
fn alternatives_and_conjunction() {
    let input = indoc! {r#"
    Token<pos=e<NN>|e<VB>, length=3>
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TypeMatch
          Id "Token"
          Predicates
            AngleOpen "<"
            Predicate
              Id "pos"
              Equals "="
              EnumLiteral "e<NN>"
              Pipe "|"
              EnumLiteral "e<VB>"
            Comma ","
            Predicate
              Id "length"
              Equals "="
              Int "3"
            AngleClose ">"
    "#);
}

#[test]
fn regex_and_insensitive_literals() {
    let input = indoc! {r#"
    Gene<symbol=r"BR.*"|i"tp53">
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TypeMatch
          Id "Gene"
          Predicates
            AngleOpen "<"
            Predicate
              Id "symbol"
              Equals "="
              RegexLiteral "r\"BR.*\""
              Pipe "|"
              InsensitiveLiteral "i\"tp53\""
            AngleClose ">"
    "#);
}

#[test]
fn captured_type_with_predicates() {
    let input = indoc! {r#"
    d:Disease<severity=e<SEVERE>>
    "#};

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        Capture
          Id "d"
          Colon ":"
          TypeMatch
            Id "Disease"
            Predicates
              AngleOpen "<"
              Predicate
                Id "severity"
                Equals "="
                EnumLiteral "e<SEVERE>"
              AngleClose ">"
    "#);
}
