use std::thread;

use indoc::indoc;
use serde_json::json;

use crate::{
    AttrKind, AttrMap, Document, Error, FuelLimits, Label, Pattern, RuntimeError, Span,
    TypeRegistry,
};

const TEXT: &str = "BRCA1 binds TP53 and BRCA2";

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    for name in ["Gene", "Token"] {
        registry
            .register_dynamic(name)
            .unwrap()
            .attribute("text", AttrKind::Text);
    }
    registry
}

fn document() -> Document {
    let registry = registry();
    let gene = registry.id_of("Gene").unwrap();
    let token = registry.id_of("Token").unwrap();
    let label = |ty, begin: usize, end: usize| {
        let attrs = AttrMap::new().with("text", &TEXT[begin..end]);
        Label::new(ty, Span::new(begin, end), attrs)
    };
    Document::builder(TEXT)
        .labels(vec![
            label(gene, 0, 5),
            label(token, 0, 5),
            label(token, 6, 11),
            label(gene, 12, 16),
            label(token, 12, 16),
            label(token, 17, 20),
            label(gene, 21, 26),
            label(token, 21, 26),
        ])
        .build()
        .unwrap()
}

fn compile(source: &str) -> Pattern {
    crate::compile(&registry(), source).unwrap()
}

#[test]
fn find_all_lists_matches_in_order() {
    let pattern = compile("Gene");

    let found = pattern.find_all(&document()).unwrap();

    assert_eq!(
        found,
        [Span::new(0, 5), Span::new(12, 16), Span::new(21, 26)]
    );
}

#[test]
fn searcher_exposes_captures() {
    let pattern = compile(r#"a:Gene Token<text="binds"> b:Gene"#);
    let doc = document();
    let mut searcher = pattern.searcher(&doc);

    assert!(searcher.search().unwrap());

    assert_eq!(searcher.span(), Some(Span::new(0, 16)));
    assert_eq!(searcher.capture_span("a"), Some(Span::new(0, 5)));
    assert_eq!(searcher.capture_span("b"), Some(Span::new(12, 16)));
    assert!(!searcher.search().unwrap());
}

#[test]
fn matches_serialize_with_captures() {
    let pattern = compile(r#"Gene Token<text="and"> (?<second>Gene)"#);

    let matches = pattern.matches(&document(), FuelLimits::default()).unwrap();

    assert_eq!(
        serde_json::to_value(&matches).unwrap(),
        json!([{
            "span": { "begin": 12, "end": 26 },
            "text": "TP53 and BRCA2",
            "captures": [{
                "name": "second",
                "span": { "begin": 21, "end": 26 },
                "text": "BRCA2",
                "label": false,
            }],
        }])
    );
}

#[test]
fn compile_errors_carry_diagnostics() {
    let source = "Gene Kinase";

    let err = crate::compile(&registry(), source).unwrap_err();

    let diagnostics = err.diagnostics().expect("compile errors have diagnostics");
    assert_eq!(diagnostics.error_count(), 1);
    let rendered = err.render(source);
    assert!(rendered.contains("Kinase"), "{rendered}");
}

#[test]
fn runtime_errors_are_reported() {
    let pattern = compile("Token+ Gene");
    let doc = document();
    let mut searcher = pattern.searcher_with_limits(&doc, FuelLimits::new().exec_fuel(3));

    let err: Error = searcher.search().unwrap_err().into();

    assert!(matches!(err, Error::Runtime(RuntimeError::ExecFuelExhausted(3))));
    assert!(err.diagnostics().is_none());
    assert_eq!(err.render(""), "runtime execution limit of 3 steps exceeded");
}

#[test]
fn pattern_is_shared_across_threads() {
    let pattern = compile(indoc! {r#"
        Gene
        Token<text="binds">
    "#});

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pattern = pattern.clone();
            thread::spawn(move || pattern.find_all(&document()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), [Span::new(0, 11)]);
    }
}

#[test]
fn source_is_kept() {
    let pattern = compile("Gene | Token");

    assert_eq!(pattern.source(), "Gene | Token");
    assert_eq!(pattern.program().captures().len(), 0);
}
