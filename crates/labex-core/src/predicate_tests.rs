use crate::{
    AttrKind, AttrMap, AttrValue, Comparator, Predicate, RegexMatcher, TypeRegistry, all_match,
};

fn token_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register_dynamic("Token")
        .unwrap()
        .attribute("text", AttrKind::Text)
        .attribute("count", AttrKind::Int)
        .attribute(
            "pos",
            AttrKind::Enum {
                variants: vec!["NN".into(), "VB".into(), "JJ".into()],
            },
        );
    registry
}

fn predicate(registry: &TypeRegistry, attr: &str, comparators: Vec<Comparator>) -> Predicate {
    let attribute = registry
        .resolve("Token")
        .unwrap()
        .attribute(attr)
        .unwrap()
        .clone();
    Predicate::new(attribute, comparators)
}

fn token(text: &str, count: i64, pos: &str) -> AttrMap {
    AttrMap::new()
        .with("text", text)
        .with("count", count)
        .with("pos", pos)
}

#[test]
fn exact_text() {
    let registry = token_registry();
    let p = predicate(&registry, "text", vec![Comparator::Exact("Cat".into())]);

    assert!(p.matches(&token("Cat", 1, "NN")));
    assert!(!p.matches(&token("cat", 1, "NN")));
}

#[test]
fn case_insensitive_text() {
    let registry = token_registry();
    let p = predicate(&registry, "text", vec![Comparator::case_insensitive("CAT")]);

    assert!(p.matches(&token("cat", 1, "NN")));
    assert!(p.matches(&token("CaT", 1, "NN")));
    assert!(!p.matches(&token("cats", 1, "NN")));
}

#[test]
fn regex_requires_full_match() {
    let registry = token_registry();
    let regex = RegexMatcher::new("ca[a-z]").unwrap();
    let p = predicate(&registry, "text", vec![Comparator::Regex(regex)]);

    assert!(p.matches(&token("cat", 1, "NN")));
    assert!(!p.matches(&token("cats", 1, "NN")));
    assert!(!p.matches(&token("scat", 1, "NN")));
}

#[test]
fn regex_alternation_is_grouped() {
    let regex = RegexMatcher::new("a|bc").unwrap();

    assert!(regex.is_full_match("a"));
    assert!(regex.is_full_match("bc"));
    assert!(!regex.is_full_match("ac"));
}

#[test]
fn invalid_regex_is_an_error() {
    assert!(RegexMatcher::new("(unclosed").is_err());
}

#[test]
fn enum_by_ordinal() {
    let registry = token_registry();
    let p = predicate(
        &registry,
        "pos",
        vec![Comparator::Enum {
            ordinal: 1,
            name: "VB".into(),
        }],
    );

    assert!(p.matches(&token("run", 1, "VB")));
    assert!(!p.matches(&token("run", 1, "NN")));
    // undeclared constant reads as absent
    assert!(!p.matches(&token("run", 1, "XX")));
}

#[test]
fn int_compares_numerically() {
    let registry = token_registry();
    let p = predicate(&registry, "count", vec![Comparator::Int(7)]);

    assert!(p.matches(&token("x", 7, "NN")));
    assert!(!p.matches(&token("x", 8, "NN")));
}

#[test]
fn int_literal_on_text_attribute_parses_text() {
    let registry = token_registry();
    let p = predicate(&registry, "text", vec![Comparator::Int(12)]);

    assert!(p.matches(&token(" 12", 0, "NN")));
    assert!(!p.matches(&token("twelve", 0, "NN")));
}

#[test]
fn comparators_are_alternatives() {
    let registry = token_registry();
    let p = predicate(
        &registry,
        "text",
        vec![
            Comparator::Exact("cat".into()),
            Comparator::Exact("dog".into()),
        ],
    );

    assert!(p.matches(&token("cat", 0, "NN")));
    assert!(p.matches(&token("dog", 0, "NN")));
    assert!(!p.matches(&token("cow", 0, "NN")));
}

#[test]
fn predicates_are_conjunctive() {
    let registry = token_registry();
    let predicates = [
        predicate(&registry, "text", vec![Comparator::Exact("run".into())]),
        predicate(
            &registry,
            "pos",
            vec![Comparator::Enum {
                ordinal: 1,
                name: "VB".into(),
            }],
        ),
    ];

    assert!(all_match(&predicates, &token("run", 0, "VB")));
    assert!(!all_match(&predicates, &token("run", 0, "NN")));
    assert!(all_match(&[], &token("anything", 0, "NN")));
}

#[test]
fn absent_attribute_fails() {
    let registry = token_registry();
    let p = predicate(&registry, "text", vec![Comparator::Exact("x".into())]);

    assert!(!p.matches(&AttrMap::new()));
    // wrong payload type
    assert!(!p.matches(&42u32));
}

#[test]
fn display() {
    let registry = token_registry();
    let p = predicate(
        &registry,
        "text",
        vec![
            Comparator::Exact("a".into()),
            Comparator::Regex(RegexMatcher::new("b+").unwrap()),
            Comparator::case_insensitive("C"),
        ],
    );

    assert_eq!(p.to_string(), r#"text="a"|r"b+"|i"c""#);
}

#[test]
fn attr_value_representations() {
    assert_eq!(AttrValue::Int(5).text(), "5");
    assert_eq!(AttrValue::from("17").as_int(), Some(17));
    assert_eq!(AttrValue::from("x").as_int(), None);
    assert_eq!(
        serde_json::to_string(&AttrValue::Int(3)).unwrap(),
        "3"
    );
    assert_eq!(
        serde_json::to_string(&AttrValue::Enum {
            ordinal: 0,
            name: "NN".into()
        })
        .unwrap(),
        r#""NN""#
    );
}

#[test]
fn oversized_regex_is_rejected() {
    // The DFA for "an `a` 20 places from the end" needs 2^21 states
    let err = RegexMatcher::new("[ab]*a[ab]{20}").unwrap_err();

    assert!(err.contains("size limit"), "{err}");
}
