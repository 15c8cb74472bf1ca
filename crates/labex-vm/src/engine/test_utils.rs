//! Shared fixtures for runtime tests.

use labex_core::{AttrKind, AttrMap, Document, Label, LabelTypeId, Program, Span, TypeRegistry};

use super::{FuelLimits, RuntimeError, Searcher};

/// Static payload for `Foo`.
pub struct Foo {
    pub baz: i64,
}

/// Registry used across runtime tests.
///
/// - `Blah`, `Bar`, `Sentence` with no attributes
/// - `Foo { baz }` with a typed accessor
/// - `Gene { text }`, `Token { text }`, `Protein { text }`
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register_dynamic("Blah").unwrap();
    registry
        .register::<Foo>("Foo")
        .unwrap()
        .int("baz", |foo| Some(foo.baz));
    registry.register_dynamic("Bar").unwrap();
    for name in ["Gene", "Token", "Protein"] {
        registry
            .register_dynamic(name)
            .unwrap()
            .attribute("text", AttrKind::Text);
    }
    registry.register_dynamic("Sentence").unwrap();
    registry
}

pub fn type_id(name: &str) -> LabelTypeId {
    registry().id_of(name).unwrap()
}

#[track_caller]
pub fn program(pattern: &str) -> Program {
    match labex_compiler::compile(&registry(), pattern) {
        Ok(program) => program,
        Err(err) => panic!("`{pattern}` should compile: {err}"),
    }
}

/// Attribute-less label of a dynamic type.
pub fn label(ty: &str, begin: usize, end: usize) -> Label {
    Label::new(type_id(ty), Span::new(begin, end), AttrMap::new())
}

/// Dynamic label whose `text` attribute is the covered document text.
pub fn text_label(text: &str, ty: &str, begin: usize, end: usize) -> Label {
    let attrs = AttrMap::new().with("text", &text[begin..end]);
    Label::new(type_id(ty), Span::new(begin, end), attrs)
}

pub fn foo(baz: i64, begin: usize, end: usize) -> Label {
    Label::new(type_id("Foo"), Span::new(begin, end), Foo { baz })
}

pub fn document(text: &str, labels: Vec<Label>) -> Document {
    Document::builder(text).labels(labels).build().unwrap()
}

/// Document of blank text long enough for `labels`.
pub fn blank_document(labels: Vec<Label>) -> Document {
    let len = labels.iter().map(Label::end).max().unwrap_or(0);
    document(&" ".repeat(len), labels)
}

/// Every match `search` reports, in order.
pub fn find_all(program: &Program, doc: &Document) -> Vec<Span> {
    try_find_all(program, doc, FuelLimits::default()).unwrap()
}

pub fn try_find_all(
    program: &Program,
    doc: &Document,
    limits: FuelLimits,
) -> Result<Vec<Span>, RuntimeError> {
    let mut searcher = Searcher::with_limits(program, doc, limits);
    let mut spans = Vec::new();
    while searcher.search()? {
        spans.extend(searcher.span());
        assert!(spans.len() <= 1_000, "search does not terminate");
    }
    Ok(spans)
}

/// Shorthand for building expected spans.
pub fn spans(ranges: &[(usize, usize)]) -> Vec<Span> {
    ranges.iter().map(|&(b, e)| Span::new(b, e)).collect()
}
