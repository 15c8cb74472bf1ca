use crate::Query;

#[test]
fn comments_and_newlines_attach_between_items() {
    let input = "Token // c\n  Gene";

    let res = Query::expect_valid_cst_full(input);

    insta::assert_snapshot!(res, @r#"
    Root [0..17]
      Seq [0..17]
        TypeMatch [0..5]
          Id [0..5] "Token"
        Whitespace [5..6] " "
        LineComment [6..10] "// c"
        Newline [10..11] "\n"
        Whitespace [11..13] "  "
        TypeMatch [13..17]
          Id [13..17] "Gene"
    "#);
}

#[test]
fn trivia_is_hidden_by_default() {
    let input = "Token   // trailing";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Seq
        TypeMatch
          Id "Token"
    "#);
}

#[test]
fn modifier_must_touch_quantifier() {
    let query = Query::expect("Token+ ?");

    assert!(!query.is_valid());
}
