use crate::Query;
use crate::parser::Binding;

fn repeats(src: &str) -> Vec<(u32, Option<u32>, Binding)> {
    let query = Query::expect_valid(src);
    query
        .analysis()
        .repeats
        .values()
        .map(|r| (r.min, r.max, r.binding))
        .collect()
}

#[test]
fn operators_resolve_to_ranges() {
    let res = repeats("Token? Gene* Protein+ Disease{2} Sentence{1,} Tok{0,4}?");

    assert_eq!(
        res,
        [
            (0, Some(1), Binding::Greedy),
            (0, None, Binding::Greedy),
            (1, None, Binding::Greedy),
            (2, Some(2), Binding::Greedy),
            (1, None, Binding::Greedy),
            (0, Some(4), Binding::Lazy),
        ]
    );
}

#[test]
fn nested_quantifiers_outer_first() {
    let res = repeats("(Token{2}){3,}+");

    assert_eq!(
        res,
        [
            (3, None, Binding::Possessive),
            (2, Some(2), Binding::Greedy),
        ]
    );
}

#[test]
fn zero_and_max_counts_are_accepted() {
    let res = repeats("Token{0} Gene{1000}");

    assert_eq!(
        res,
        [(0, Some(0), Binding::Greedy), (1000, Some(1000), Binding::Greedy)]
    );
}

#[test]
fn min_exceeds_max() {
    let res = Query::expect_invalid("Token{3,1}");

    insta::assert_snapshot!(res, @r"
    error: invalid repetition bounds: minimum 3 exceeds maximum 1
      |
    1 | Token{3,1}
      |      ^^^^^
    ");
}

#[test]
fn negative_count() {
    let res = Query::expect_invalid("Token{-2,3}");

    insta::assert_snapshot!(res, @r"
    error: invalid repetition bounds: repetition count must be non-negative
      |
    1 | Token{-2,3}
      |       ^^
    ");
}

#[test]
fn count_too_large() {
    let res = Query::expect_invalid("Token{1001}");

    insta::assert_snapshot!(res, @r"
    error: repetition count too large: `1001` exceeds 1000
      |
    1 | Token{1001}
      |       ^^^^
    ");
}

#[test]
fn invalid_bounds_leave_no_repeat() {
    let query = Query::expect("Token{5,2} Gene+");

    assert_eq!(query.analysis().repeats.len(), 1);
    assert!(query.analysis().repeats.values().all(|r| r.is_unbounded()));
}
