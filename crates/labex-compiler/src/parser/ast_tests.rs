use crate::parser::ast::{
    Alt, Binding, Capture, Contains, Expr, Lookahead, NamedGroup, Quantifier, QuantifierOp,
    TypeMatch,
};
use crate::parser::{SyntaxNode, parse};

fn root(src: &str) -> SyntaxNode {
    let res = parse(src).unwrap();
    assert!(res.diagnostics.is_empty(), "{src:?} has errors");
    res.root.as_cst().clone()
}

fn first<N>(src: &str, cast: fn(SyntaxNode) -> Option<N>) -> N {
    root(src)
        .descendants()
        .find_map(cast)
        .expect("node not found")
}

#[test]
fn root_body_is_a_sequence() {
    let res = parse("Token Gene").unwrap();

    let Some(Expr::Seq(seq)) = res.root.body() else {
        panic!("expected a sequence");
    };
    assert_eq!(seq.items().count(), 2);
}

#[test]
fn alternation_branches() {
    let alt = first("Gene | Protein Disease | Token", Alt::cast);

    let sizes: Vec<_> = alt.branches().map(|b| b.items().count()).collect();
    assert_eq!(sizes, [1, 2, 1]);
}

#[test]
fn type_match_predicates() {
    let node = first(r#"Token<pos=e<NN>|e<VB>, text="a">"#, TypeMatch::cast);

    assert_eq!(node.name().unwrap().text(), "Token");
    let predicates: Vec<_> = node
        .predicates()
        .map(|p| {
            let literals: Vec<_> = p.literals().map(|t| t.text().to_owned()).collect();
            (p.attribute().unwrap().text().to_owned(), literals)
        })
        .collect();
    assert_eq!(
        predicates,
        [
            ("pos".to_owned(), vec!["e<NN>".to_owned(), "e<VB>".to_owned()]),
            ("text".to_owned(), vec![r#""a""#.to_owned()]),
        ]
    );
}

#[test]
fn capture_name_and_type() {
    let capture = first("who:Gene", Capture::cast);

    assert_eq!(capture.name().unwrap().text(), "who");
    assert_eq!(
        capture.type_match().unwrap().name().unwrap().text(),
        "Gene"
    );
}

#[test]
fn named_group_name() {
    let group = first("(?<span> Token Gene)", NamedGroup::cast);

    assert_eq!(group.name().unwrap().text(), "span");
    assert!(matches!(group.body(), Some(Expr::Seq(_))));
}

#[test]
fn lookahead_polarity() {
    assert!(!first("(?=Gene)", Lookahead::cast).is_negative());
    assert!(first("(?!Gene)", Lookahead::cast).is_negative());
}

#[test]
fn quantifier_operators_and_binding() {
    let cases = [
        ("Token?", QuantifierOp::Optional, Binding::Greedy),
        ("Token*?", QuantifierOp::Star, Binding::Lazy),
        ("Token++", QuantifierOp::Plus, Binding::Possessive),
        ("Token{2}+", QuantifierOp::Bounded, Binding::Possessive),
        ("Token{2,3}?", QuantifierOp::Bounded, Binding::Lazy),
    ];

    for (src, op, binding) in cases {
        let quant = first(src, Quantifier::cast);
        assert_eq!(quant.op(), Some(op), "{src}");
        assert_eq!(quant.binding(), binding, "{src}");
    }
}

#[test]
fn spaced_modifier_is_not_a_binding() {
    let res = parse("Token* ?").unwrap();

    assert!(!res.diagnostics.is_empty());
}

#[test]
fn bounds_forms() {
    let exact = first("Token{3}", Quantifier::cast).bounds().unwrap();
    assert_eq!(exact.min().unwrap().text(), "3");
    assert!(exact.max().is_none());
    assert!(!exact.is_open());

    let open = first("Token{3,}", Quantifier::cast).bounds().unwrap();
    assert!(open.is_open());

    let range = first("Token{3,5}", Quantifier::cast).bounds().unwrap();
    assert_eq!(range.max().unwrap().text(), "5");
    assert!(!range.is_open());
}

#[test]
fn contains_inner_and_target() {
    let contains = first("[Token Gene][^Protein]", Contains::cast);

    assert!(matches!(contains.inner(), Some(Expr::Pin(_))));
    assert_eq!(
        contains.target().unwrap().name().unwrap().text(),
        "Protein"
    );
}
